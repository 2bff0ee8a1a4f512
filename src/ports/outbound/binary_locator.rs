/// BinaryLocator port for checking that an executable can be run
pub trait BinaryLocator {
    /// Returns true if `binary` is found on the executable search path
    fn is_available(&self, binary: &str) -> bool;
}
