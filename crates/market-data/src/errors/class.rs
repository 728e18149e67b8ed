/// Classification of a quote failure.
///
/// Used for logging and observability at the resolver's outer edge, where
/// every failure collapses to "no price available". The class preserves the
/// cause after the external contract has discarded it.
///
/// # Behavior Summary
///
/// | Class | Meaning | Resolver log level |
/// |-------|---------|--------------------|
/// | `NotFound` | The identifier matches nothing at the provider | debug |
/// | `Transient` | Network, timeout, or non-success HTTP status | debug |
/// | `Malformed` | Payload missing fields or non-numeric price | debug |
/// | `Configuration` | Required credential absent, no call attempted | warn |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureClass {
    /// No matching scheme/ticker/coin id at the provider.
    /// Not an error condition - the identifier simply resolves to nothing.
    NotFound,

    /// Connection failure, timeout, or non-success HTTP status.
    ///
    /// Not retried within a single resolution; the caller's next full
    /// refresh cycle is the retry.
    Transient,

    /// The provider answered but the payload was unusable: expected fields
    /// missing, a price that failed to parse, or a non-positive price.
    Malformed,

    /// A required credential is missing. No network call was made.
    ///
    /// Distinguished from `Transient` so operators can tell a misconfigured
    /// deployment apart from a flaky provider.
    Configuration,
}
