//! Error Indication Procedure
//!
//! Implements the Error Indication procedure of O-RAN E2AP v2 Section 8.3.4.
//! Either side sends it to report errors in an incoming message that cannot be
//! reported by an appropriate failure message. No response is expected.

use crate::error::Result;
use crate::schema::common::{Criticality, ProcedureCode};
use crate::schema::e2ap::{
    Cause, CriticalityDiagnostics, CriticalityDiagnosticsIeItem, ErrorIndication, ErrorIndicationIe,
    ErrorIndicationIeValue, RanFunctionId, RicRequestId, TransactionIdIe, TriggeringMessage,
};
use crate::schema::validated;
use crate::transaction::TransactionId;

/// Builder for an E2AP Error Indication.
///
/// RICrequestID and RANfunctionID are always emitted (zero unless set).
/// TransactionID and Cause are emitted only when set. CriticalityDiagnostics
/// is emitted when any failure detail is set, and then carries the request id.
#[derive(Debug, Clone, Default)]
pub struct ErrorIndicationBuilder {
    transaction_id: Option<u32>,
    requestor_id: i32,
    ric_instance_id: i32,
    ran_function_id: i32,
    cause: Option<Cause>,
    failure_procedure_code: Option<u8>,
    failure_triggering_message: Option<TriggeringMessage>,
    failure_criticality: Option<Criticality>,
    ies_criticality_diagnostics: Vec<CriticalityDiagnosticsIeItem>,
}

impl ErrorIndicationBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transaction id (E2 setup class procedures).
    pub fn with_transaction_id(mut self, id: TransactionId) -> Self {
        self.transaction_id = Some(id.value());
        self
    }

    /// Set the RIC requestor id.
    pub fn with_request_id(mut self, requestor_id: i32) -> Self {
        self.requestor_id = requestor_id;
        self
    }

    /// Set the RIC instance id.
    pub fn with_ric_instance_id(mut self, ric_instance_id: i32) -> Self {
        self.ric_instance_id = ric_instance_id;
        self
    }

    /// Set the RAN function id.
    pub fn with_ran_function_id(mut self, ran_function_id: i32) -> Self {
        self.ran_function_id = ran_function_id;
        self
    }

    /// Set the cause.
    pub fn with_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Set the procedure code of the failed procedure.
    pub fn with_failure_procedure_code(mut self, code: u8) -> Self {
        self.failure_procedure_code = Some(code);
        self
    }

    /// Set the triggering message of the failed procedure.
    pub fn with_failure_triggering_message(mut self, message: TriggeringMessage) -> Self {
        self.failure_triggering_message = Some(message);
        self
    }

    /// Set the criticality of the failed procedure.
    pub fn with_failure_criticality(mut self, criticality: Criticality) -> Self {
        self.failure_criticality = Some(criticality);
        self
    }

    /// Set the list of offending IEs.
    pub fn with_ies_criticality_diagnostics(
        mut self,
        items: &[CriticalityDiagnosticsIeItem],
    ) -> Self {
        self.ies_criticality_diagnostics = items.to_vec();
        self
    }

    fn has_diagnostics(&self) -> bool {
        self.failure_procedure_code.is_some()
            || self.failure_triggering_message.is_some()
            || self.failure_criticality.is_some()
            || !self.ies_criticality_diagnostics.is_empty()
    }

    /// Assembles and validates the Error Indication.
    pub fn build(self) -> Result<ErrorIndication> {
        let mut protocol_ies = Vec::new();
        let request_id = RicRequestId {
            ric_requestor_id: self.requestor_id,
            ric_instance_id: self.ric_instance_id,
        };

        // IE: TransactionID (optional)
        if let Some(id) = self.transaction_id {
            protocol_ies.push(ErrorIndicationIe::new(ErrorIndicationIeValue::TransactionId(
                TransactionIdIe(id),
            )));
        }

        // IE: RICrequestID
        protocol_ies.push(ErrorIndicationIe::new(ErrorIndicationIeValue::RicRequestId(
            request_id,
        )));

        // IE: RANfunctionID
        protocol_ies.push(ErrorIndicationIe::new(ErrorIndicationIeValue::RanFunctionId(
            RanFunctionId(self.ran_function_id),
        )));

        // IE: Cause (optional)
        if let Some(cause) = self.cause {
            protocol_ies.push(ErrorIndicationIe::new(ErrorIndicationIeValue::Cause(cause)));
        }

        // IE: CriticalityDiagnostics (optional)
        if self.has_diagnostics() {
            let diagnostics = CriticalityDiagnostics {
                procedure_code: self.failure_procedure_code.map(ProcedureCode),
                triggering_message: self.failure_triggering_message,
                procedure_criticality: self.failure_criticality,
                ric_requestor_id: Some(request_id),
                ies_criticality_diagnostics: self.ies_criticality_diagnostics,
            };
            protocol_ies.push(ErrorIndicationIe::new(
                ErrorIndicationIeValue::CriticalityDiagnostics(diagnostics),
            ));
        }

        validated(ErrorIndication { protocol_ies })
    }
}
