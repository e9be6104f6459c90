use crate::model::employee::{Employee, FaceEncoding};

/// Maximum Euclidean distance at which two encodings are the same person.
pub const FACE_TOLERANCE: f64 = 0.6;

/// Returns the first candidate, in stored order, within [`FACE_TOLERANCE`] of `query`.
///
/// This is not a nearest-neighbour search: an earlier candidate inside the
/// tolerance wins over a closer one that comes later.
pub fn find_match<'a>(query: &FaceEncoding, candidates: &'a [Employee]) -> Option<&'a Employee> {
    candidates
        .iter()
        .find(|candidate| query.distance(&candidate.encoding) <= FACE_TOLERANCE)
}
