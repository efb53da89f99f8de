//! Common contract for entities owned by a record store.

/// Entity that can live in a `RecordStore`.
///
/// Implementors own a stable string id. The associated `Input` type is the
/// same shape minus the id, used by add operations.
pub trait Record: Clone {
    /// Id-less payload collected by forms and passed to `add`.
    type Input;

    /// Short entity name used in log lines (`company`, `job`).
    const KIND: &'static str;

    /// Stable identifier of this record.
    fn id(&self) -> &str;

    /// Builds a full record from an assigned id and caller input.
    fn from_input(id: String, input: Self::Input) -> Self;
}
