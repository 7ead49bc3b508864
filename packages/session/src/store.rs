/// Storage key of the persisted session record.
pub const USER_KEY: &str = "user";

/// Async trait for the durable slot holding the serialized session identity.
///
/// A `None` from `load` means the same thing whether the slot is empty or the
/// backend failed; writes are best-effort and never surface errors to the
/// caller.
pub trait SessionStore {
    fn load(&self) -> impl std::future::Future<Output = Option<String>>;
    fn save(
        &self,
        value: &str,
    ) -> impl std::future::Future<Output = ()>;
    fn clear(&self) -> impl std::future::Future<Output = ()>;
}
