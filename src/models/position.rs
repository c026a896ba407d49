use serde::{Deserialize, Serialize};

/// A committed reading position. `page`, `juz` and `surah` always agree with
/// the reference tables; `ayat` is a free counter within the surah.
///
/// Several short surahs can begin on the same page, so `surah` may be any
/// surah whose first page is `page`, not only the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingPosition {
    pub page: u32,
    pub juz: u32,
    pub surah: u32,
    pub ayat: i64,
}

impl Default for ReadingPosition {
    fn default() -> Self {
        Self {
            page: 1,
            juz: 1,
            surah: 1,
            ayat: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Page,
    Juz,
    Surah,
    Ayat,
}

impl FieldKind {
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Page,
        FieldKind::Juz,
        FieldKind::Surah,
        FieldKind::Ayat,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FieldKind::Page => "Page",
            FieldKind::Juz => "Juz",
            FieldKind::Surah => "Surah",
            FieldKind::Ayat => "Ayat",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One input field as the user sees it: either a committed number or text
/// that has not parsed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Committed(i64),
    Pending,
}

impl Field {
    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        matches!(self, Field::Pending)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Committed(v) => write!(f, "{}", v),
            Field::Pending => write!(f, ""),
        }
    }
}

/// Editable view over a committed position. A field turns `Pending` when its
/// last edit did not parse; the committed position underneath is untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionForm {
    position: ReadingPosition,
    page: Field,
    juz: Field,
    surah: Field,
    ayat: Field,
}

impl PositionForm {
    pub fn new(position: ReadingPosition) -> Self {
        Self {
            position,
            page: Field::Committed(position.page as i64),
            juz: Field::Committed(position.juz as i64),
            surah: Field::Committed(position.surah as i64),
            ayat: Field::Committed(position.ayat),
        }
    }

    pub fn position(&self) -> ReadingPosition {
        self.position
    }

    pub fn field(&self, kind: FieldKind) -> Field {
        match kind {
            FieldKind::Page => self.page,
            FieldKind::Juz => self.juz,
            FieldKind::Surah => self.surah,
            FieldKind::Ayat => self.ayat,
        }
    }

    /// Replaces every field with the values of a newly committed position.
    pub fn commit(&mut self, position: ReadingPosition) {
        *self = Self::new(position);
    }

    /// Marks a single field as pending, leaving the others and the committed
    /// position as they were.
    pub fn mark_pending(&mut self, kind: FieldKind) {
        match kind {
            FieldKind::Page => self.page = Field::Pending,
            FieldKind::Juz => self.juz = Field::Pending,
            FieldKind::Surah => self.surah = Field::Pending,
            FieldKind::Ayat => self.ayat = Field::Pending,
        }
    }

    #[cfg(test)]
    pub fn has_pending(&self) -> bool {
        [self.page, self.juz, self.surah, self.ayat]
            .iter()
            .any(Field::is_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_position_is_the_first_page() {
        let pos = ReadingPosition::default();
        assert_eq!((pos.page, pos.juz, pos.surah, pos.ayat), (1, 1, 1, 1));
    }

    #[test]
    fn pending_field_keeps_committed_position() {
        let pos = ReadingPosition {
            page: 22,
            juz: 2,
            surah: 2,
            ayat: 1,
        };
        let mut form = PositionForm::new(pos);
        form.mark_pending(FieldKind::Page);

        assert!(form.field(FieldKind::Page).is_pending());
        assert_eq!(form.field(FieldKind::Juz), Field::Committed(2));
        assert_eq!(form.position(), pos);
        assert!(form.has_pending());

        form.commit(pos);
        assert!(!form.has_pending());
        assert_eq!(form.field(FieldKind::Page), Field::Committed(22));
    }

    #[test]
    fn pending_field_renders_blank() {
        assert_eq!(Field::Pending.to_string(), "");
        assert_eq!(Field::Committed(-3).to_string(), "-3");
    }

    #[test]
    fn position_serializes_as_plain_numbers() {
        let json = serde_json::to_string(&ReadingPosition::default()).unwrap();
        assert_eq!(json, r#"{"page":1,"juz":1,"surah":1,"ayat":1}"#);
    }
}
