//! Positions that expect a value of a particular type.

use untypedconst_common::diagnostics::{DiagnosticMessage, diagnostic_messages};

/// Where a candidate expression appears. Selects the message only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteKind {
    CallArgument,
    ReturnValue,
    SendOperand,
    CompositeLiteralKey,
    CompositeLiteralValue,
    CompositeLiteralElement,
    IndexKey,
}

impl SiteKind {
    pub fn message(self) -> &'static DiagnosticMessage {
        match self {
            SiteKind::CallArgument => &diagnostic_messages::PASSING_NAKED_LITERAL_TO_PARAMETER,
            SiteKind::ReturnValue => &diagnostic_messages::RETURNING_NAKED_LITERAL,
            SiteKind::SendOperand => &diagnostic_messages::SENDING_NAKED_LITERAL_TO_CHANNEL,
            SiteKind::CompositeLiteralKey => &diagnostic_messages::NAKED_LITERAL_AS_COMPOSITE_KEY,
            SiteKind::CompositeLiteralValue => {
                &diagnostic_messages::NAKED_LITERAL_AS_COMPOSITE_VALUE
            }
            SiteKind::CompositeLiteralElement => {
                &diagnostic_messages::NAKED_LITERAL_AS_COMPOSITE_ELEMENT
            }
            SiteKind::IndexKey => &diagnostic_messages::NAKED_LITERAL_AS_INDEX,
        }
    }
}
