use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const PASSING_NAKED_LITERAL_TO_PARAMETER: u32 = 9001;
    pub const RETURNING_NAKED_LITERAL: u32 = 9002;
    pub const SENDING_NAKED_LITERAL_TO_CHANNEL: u32 = 9003;
    pub const NAKED_LITERAL_AS_COMPOSITE_KEY: u32 = 9004;
    pub const NAKED_LITERAL_AS_COMPOSITE_VALUE: u32 = 9005;
    pub const NAKED_LITERAL_AS_COMPOSITE_ELEMENT: u32 = 9006;
    pub const NAKED_LITERAL_AS_INDEX: u32 = 9007;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const PASSING_NAKED_LITERAL_TO_PARAMETER: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PASSING_NAKED_LITERAL_TO_PARAMETER,
        category: DiagnosticCategory::Warning,
        message: "passing naked literal to parameter of defined type \"{0}\"",
    };
    pub const RETURNING_NAKED_LITERAL: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::RETURNING_NAKED_LITERAL,
        category: DiagnosticCategory::Warning,
        message: "returning naked literal as defined type \"{0}\"",
    };
    pub const SENDING_NAKED_LITERAL_TO_CHANNEL: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::SENDING_NAKED_LITERAL_TO_CHANNEL,
        category: DiagnosticCategory::Warning,
        message: "sending naked literal to channel of defined type \"{0}\"",
    };
    pub const NAKED_LITERAL_AS_COMPOSITE_KEY: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::NAKED_LITERAL_AS_COMPOSITE_KEY,
        category: DiagnosticCategory::Warning,
        message: "using naked literal as composite literal's element key of defined type \"{0}\"",
    };
    pub const NAKED_LITERAL_AS_COMPOSITE_VALUE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::NAKED_LITERAL_AS_COMPOSITE_VALUE,
        category: DiagnosticCategory::Warning,
        message: "using naked literal as composite literal's element value of defined type \"{0}\"",
    };
    pub const NAKED_LITERAL_AS_COMPOSITE_ELEMENT: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::NAKED_LITERAL_AS_COMPOSITE_ELEMENT,
        category: DiagnosticCategory::Warning,
        message: "using naked literal as composite literal's element of defined type \"{0}\"",
    };
    pub const NAKED_LITERAL_AS_INDEX: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::NAKED_LITERAL_AS_INDEX,
        category: DiagnosticCategory::Warning,
        message: "using naked literal for indexing the value whose key type is defined type \"{0}\"",
    };
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    diagnostic_messages::PASSING_NAKED_LITERAL_TO_PARAMETER,
    diagnostic_messages::RETURNING_NAKED_LITERAL,
    diagnostic_messages::SENDING_NAKED_LITERAL_TO_CHANNEL,
    diagnostic_messages::NAKED_LITERAL_AS_COMPOSITE_KEY,
    diagnostic_messages::NAKED_LITERAL_AS_COMPOSITE_VALUE,
    diagnostic_messages::NAKED_LITERAL_AS_COMPOSITE_ELEMENT,
    diagnostic_messages::NAKED_LITERAL_AS_INDEX,
];
