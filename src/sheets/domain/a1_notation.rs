use std::fmt::Formatter;

use super::row::Row;

/// An already-rendered sheet range in A1 notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(String);

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<A1Notation> for String {
    fn from(a1_notation: A1Notation) -> Self {
        a1_notation.0
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub trait ToA1Notation {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation;
}

/// A bare row renders as a whole-row range ("1:1"). Writing through such a
/// range replaces only as many cells as the payload is wide; columns to the
/// right keep their contents.
impl ToA1Notation for Row {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation {
        match sheet_name {
            Some(sheet_name) => {
                A1Notation(format!("'{}'!{}:{}", sheet_name, self.row(), self.row()))
            }
            None => A1Notation(format!("{}:{}", self.row(), self.row())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_a1_notation() {
        let row = Row::from_row(1);

        assert_eq!(row.to_a1_notation(None), A1Notation("1:1".to_owned()));
    }

    #[test]
    fn test_row_to_a1_notation_with_sheet_name() {
        let row = Row::from_row(1);

        assert_eq!(
            row.to_a1_notation(Some("Sheet1")),
            A1Notation("'Sheet1'!1:1".to_owned())
        );
    }

    #[test]
    fn test_later_row_to_a1_notation() {
        let row = Row::from_row(26);

        assert_eq!(row.to_a1_notation(None), A1Notation("26:26".to_owned()));
    }
}
