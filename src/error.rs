// ─── Error ──────────────────────────────────────────────────────────────────
use smol_str::SmolStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("Type mismatch on {field}: expected {expected}, got {actual}")]
    TypeMismatch {
        field: SmolStr,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("Field {0} is read-only")]
    ReadOnlyField(SmolStr),
    #[error("Unknown field: {0}")]
    UnknownField(SmolStr),
}
