use super::{Formatter, ToSql};

use cratedb_core::Result;

/// A column identifier, double-quoted at every nesting level to protect
/// case-sensitive and reserved names.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push('"');
        f.dst.push_str(self.0.as_ref());
        f.dst.push('"');
        Ok(())
    }
}
