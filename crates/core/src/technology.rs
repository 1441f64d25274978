//! Technology reference data.

/// The controlled vocabulary seeded into the `technologies` table.
///
/// Matching is exact and case-sensitive.
pub const CONTROLLED_VOCABULARY: [&str; 9] = [
    "JavaScript",
    "Python",
    "React",
    "Express.js",
    "HTML",
    "CSS",
    "Django",
    "PostgreSQL",
    "MongoDB",
];

/// Which side of the project/technology link a request is operating on.
///
/// An unknown technology name is a bad request when attaching but a missing
/// resource when detaching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOp {
    Attach,
    Detach,
}
