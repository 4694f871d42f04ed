//! E2AP v2 structures used by the toolkit (Error Indication)

use serde::{Deserialize, Serialize};

use super::common::{Criticality, Presence, ProcedureCode, ProtocolIeId};
use super::{check_range, check_size, Validate};
use crate::error::{E2Error, Result};

/// Procedure code of Error Indication
pub const ID_ERROR_INDICATION: u8 = 2;

/// IE: Cause
pub const ID_CAUSE: u16 = 1;
/// IE: CriticalityDiagnostics
pub const ID_CRITICALITY_DIAGNOSTICS: u16 = 2;
/// IE: RANfunctionID
pub const ID_RAN_FUNCTION_ID: u16 = 5;
/// IE: RICrequestID
pub const ID_RIC_REQUEST_ID: u16 = 29;
/// IE: TransactionID
pub const ID_TRANSACTION_ID: u16 = 49;

/// Largest RANfunctionID
pub const MAX_RAN_FUNCTION_ID: i64 = 4095;
/// Largest RIC requestor / instance ID
pub const MAX_RIC_REQUEST_ID: i64 = 65535;
/// Largest TransactionID
pub const MAX_TRANSACTION_ID: i64 = 255;
/// maxnoofErrors
pub const MAX_NOOF_ERRORS: usize = 256;

/// RIC request identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RicRequestId {
    /// RIC requestor ID (0..65535)
    pub ric_requestor_id: i32,
    /// RIC instance ID (0..65535)
    pub ric_instance_id: i32,
}

impl Validate for RicRequestId {
    fn validate(&self) -> Result<()> {
        const S: &str = "RICrequestID";
        check_range(S, "ricRequestorID", i64::from(self.ric_requestor_id), 0, MAX_RIC_REQUEST_ID)?;
        check_range(S, "ricInstanceID", i64::from(self.ric_instance_id), 0, MAX_RIC_REQUEST_ID)
    }
}

/// RAN function identifier (0..4095)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RanFunctionId(pub i32);

/// E2AP transaction identifier (0..255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionIdIe(pub u32);

/// RIC request cause
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CauseRicRequest {
    RanFunctionIdInvalid,
    ActionNotSupported,
    ExcessiveActions,
    DuplicateAction,
    DuplicateEventTrigger,
    FunctionResourceLimit,
    RequestIdUnknown,
    InconsistentActionSubsequentActionSequence,
    ControlMessageInvalid,
    RicCallProcessIdInvalid,
    ControlTimerExpired,
    ControlFailedToExecute,
    SystemNotReady,
    Unspecified,
}

/// RIC service cause
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CauseRicService {
    RanFunctionNotSupported,
    ExcessiveFunctions,
    RicResourceLimit,
}

/// E2 node cause
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CauseE2Node {
    E2NodeComponentUnknown,
}

/// Transport cause
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CauseTransport {
    Unspecified,
    TransportResourceUnavailable,
}

/// Protocol cause
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CauseProtocol {
    TransferSyntaxError,
    AbstractSyntaxErrorReject,
    AbstractSyntaxErrorIgnoreAndNotify,
    MessageNotCompatibleWithReceiverState,
    SemanticError,
    AbstractSyntaxErrorFalselyConstructedMessage,
    Unspecified,
}

/// Miscellaneous cause
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CauseMisc {
    ControlProcessingOverload,
    HardwareFailure,
    OmIntervention,
    Unspecified,
}

/// E2AP Cause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cause {
    /// RIC request related
    RicRequest(CauseRicRequest),
    /// RIC service related
    RicService(CauseRicService),
    /// E2 node related
    E2Node(CauseE2Node),
    /// Transport related
    Transport(CauseTransport),
    /// Protocol related
    Protocol(CauseProtocol),
    /// Miscellaneous
    Misc(CauseMisc),
}

/// Triggering message of the failed procedure
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggeringMessage {
    InitiatingMessage,
    SuccessfulOutcome,
    UnsuccessfulOutcome,
}

/// Type of IE error
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeOfError {
    NotUnderstood,
    Missing,
}

/// One IE reported in criticality diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalityDiagnosticsIeItem {
    /// Criticality of the offending IE
    pub ie_criticality: Criticality,
    /// Offending IE id
    pub ie_id: ProtocolIeId,
    /// What went wrong
    pub type_of_error: TypeOfError,
}

/// Criticality diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CriticalityDiagnostics {
    /// Procedure code of the failed procedure
    pub procedure_code: Option<ProcedureCode>,
    /// Triggering message of the failed procedure
    pub triggering_message: Option<TriggeringMessage>,
    /// Criticality of the failed procedure
    pub procedure_criticality: Option<Criticality>,
    /// Request the failure relates to
    pub ric_requestor_id: Option<RicRequestId>,
    /// Offending IEs
    pub ies_criticality_diagnostics: Vec<CriticalityDiagnosticsIeItem>,
}

impl Validate for CriticalityDiagnostics {
    fn validate(&self) -> Result<()> {
        self.ric_requestor_id.validate()?;
        check_size(
            "CriticalityDiagnostics",
            "iEsCriticalityDiagnostics",
            self.ies_criticality_diagnostics.len(),
            0,
            MAX_NOOF_ERRORS,
        )
    }
}

/// Value of an Error Indication IE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorIndicationIeValue {
    /// TransactionID
    TransactionId(TransactionIdIe),
    /// RICrequestID
    RicRequestId(RicRequestId),
    /// RANfunctionID
    RanFunctionId(RanFunctionId),
    /// Cause
    Cause(Cause),
    /// CriticalityDiagnostics
    CriticalityDiagnostics(CriticalityDiagnostics),
}

impl ErrorIndicationIeValue {
    /// IE id, criticality and presence this value must be carried with.
    pub fn ie_attributes(&self) -> (u16, Criticality, Presence) {
        match self {
            Self::TransactionId(_) => (ID_TRANSACTION_ID, Criticality::Reject, Presence::Optional),
            Self::RicRequestId(_) => (ID_RIC_REQUEST_ID, Criticality::Reject, Presence::Optional),
            Self::RanFunctionId(_) => (ID_RAN_FUNCTION_ID, Criticality::Reject, Presence::Optional),
            Self::Cause(_) => (ID_CAUSE, Criticality::Ignore, Presence::Optional),
            Self::CriticalityDiagnostics(_) => {
                (ID_CRITICALITY_DIAGNOSTICS, Criticality::Ignore, Presence::Optional)
            }
        }
    }
}

/// Error Indication protocol IE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorIndicationIe {
    /// IE id
    pub id: ProtocolIeId,
    /// IE criticality
    pub criticality: Criticality,
    /// IE presence
    pub presence: Presence,
    /// IE value
    pub value: ErrorIndicationIeValue,
}

impl ErrorIndicationIe {
    /// Wraps `value` with the id, criticality and presence the schema assigns it.
    pub fn new(value: ErrorIndicationIeValue) -> Self {
        let (id, criticality, presence) = value.ie_attributes();
        Self {
            id: ProtocolIeId(id),
            criticality,
            presence,
            value,
        }
    }
}

/// E2AP Error Indication
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorIndication {
    /// Protocol IEs in schema order
    pub protocol_ies: Vec<ErrorIndicationIe>,
}

impl ErrorIndication {
    /// Looks up an IE by id.
    pub fn ie(&self, id: u16) -> Option<&ErrorIndicationIe> {
        self.protocol_ies.iter().find(|ie| ie.id.0 == id)
    }

    /// Returns the RICrequestID IE value.
    pub fn ric_request_id(&self) -> Option<RicRequestId> {
        self.protocol_ies.iter().find_map(|ie| match ie.value {
            ErrorIndicationIeValue::RicRequestId(id) => Some(id),
            _ => None,
        })
    }

    /// Returns the Cause IE value.
    pub fn cause(&self) -> Option<Cause> {
        self.protocol_ies.iter().find_map(|ie| match ie.value {
            ErrorIndicationIeValue::Cause(cause) => Some(cause),
            _ => None,
        })
    }

    /// Wraps the message in an initiating E2AP PDU.
    pub fn into_pdu(self) -> E2apPdu {
        E2apPdu::InitiatingMessage(InitiatingMessage {
            procedure_code: ProcedureCode(ID_ERROR_INDICATION),
            criticality: Criticality::Ignore,
            value: InitiatingMessageValue::ErrorIndication(self),
        })
    }
}

impl Validate for ErrorIndication {
    fn validate(&self) -> Result<()> {
        const S: &str = "ErrorIndication";

        for (i, ie) in self.protocol_ies.iter().enumerate() {
            let (id, criticality, presence) = ie.value.ie_attributes();
            if ie.id.0 != id || ie.criticality != criticality || ie.presence != presence {
                return Err(E2Error::validation(
                    S,
                    format!(
                        "IE {} carried as ({:?}, {:?}), schema requires ({id}, {criticality:?})",
                        ie.id.0, ie.criticality, ie.presence
                    ),
                ));
            }
            if self.protocol_ies[..i].iter().any(|prev| prev.id == ie.id) {
                return Err(E2Error::validation(S, format!("IE {id} repeated")));
            }

            match &ie.value {
                ErrorIndicationIeValue::TransactionId(t) => {
                    check_range(S, "TransactionID", i64::from(t.0), 0, MAX_TRANSACTION_ID)?
                }
                ErrorIndicationIeValue::RicRequestId(r) => r.validate()?,
                ErrorIndicationIeValue::RanFunctionId(f) => {
                    check_range(S, "RANfunctionID", i64::from(f.0), 0, MAX_RAN_FUNCTION_ID)?
                }
                ErrorIndicationIeValue::Cause(_) => {}
                ErrorIndicationIeValue::CriticalityDiagnostics(d) => d.validate()?,
            }
        }
        Ok(())
    }
}

/// Initiating message value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitiatingMessageValue {
    /// Error Indication
    ErrorIndication(ErrorIndication),
}

/// E2AP initiating message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiatingMessage {
    /// Procedure code
    pub procedure_code: ProcedureCode,
    /// Procedure criticality
    pub criticality: Criticality,
    /// Message
    pub value: InitiatingMessageValue,
}

/// E2AP PDU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum E2apPdu {
    /// Initiating message
    InitiatingMessage(InitiatingMessage),
}
