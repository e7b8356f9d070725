/// Coarse classification shared by every error this crate returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Empty pattern.
    InvalidArgument,
    /// Catch-all not last, catch-all given children, bad parameter name.
    MalformedPattern,
    /// Constraint failed to compile.
    InvalidPattern,
    /// Same structural position bound under two names.
    NameConflict,
    DuplicateRoute,
    DuplicateConflictingHandler,
    /// A handler transform returned an error.
    TransformRejected,
    /// Router used in the wrong phase (add after seal, find before seal).
    Lifecycle,
    Configuration,
}
