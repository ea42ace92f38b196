use crate::document::{DeclarationKind, Document};
use crate::error::Violation;

/// Fails on the first kind in `forbidden` that `doc` declares.
///
/// Kinds are checked in the caller's order, so the reported violation does
/// not depend on where declarations sit in the file.
pub fn should_not_contain(doc: &Document, forbidden: &[DeclarationKind]) -> Result<(), Violation> {
    match forbidden.iter().find(|kind| doc.declares(**kind)) {
        Some(kind) => Err(Violation::shape(*kind)),
        None => Ok(()),
    }
}
