/// Housekeeping hooks for caches that hold expired entries in memory.
///
/// Remote backends expire entries on their own and do not implement this.
pub trait CacheMaintenance: Send + Sync {
    /// Drops expired entries and returns how many were removed.
    fn purge_expired(&self) -> usize;

    /// Entries currently held, including expired ones not yet purged.
    fn entry_count(&self) -> usize;
}
