//! Reducer-backed form state, generic over a flat set of string fields.
//!
//! A [`FormState`] is constructed from an initial snapshot of named string
//! fields and mutated only through [`Transition`]s. The set of field names
//! is fixed at construction: updates never add or remove keys, and
//! [`FormState::reset`] restores the construction-time snapshot regardless
//! of how many edits preceded it.

use std::collections::BTreeMap;

/// A single state transition applied to a [`FormState`].
///
/// This is a closed set: every transition is handled exhaustively, so there
/// is no fallback error path for an unknown action kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Replace the value of one named field, leaving all others untouched.
    UpdateField {
        /// Field name, as bound to the originating input.
        name: String,
        /// New value, stored verbatim (no trimming or coercion).
        value: String,
    },
    /// Discard all live edits and restore the initial snapshot.
    Reset,
}

/// Controlled-input state for a flat string-keyed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    initial: BTreeMap<String, String>,
    fields: BTreeMap<String, String>,
}

impl FormState {
    /// Creates a form from an initial snapshot of named string fields.
    ///
    /// The snapshot is captured as-is; resetting later restores exactly
    /// these values.
    #[must_use]
    pub fn new<N, V>(initial: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let initial: BTreeMap<String, String> = initial
            .into_iter()
            .map(|(n, v)| (n.into(), v.into()))
            .collect();
        Self {
            fields: initial.clone(),
            initial,
        }
    }

    /// Creates a one-field form, the common case for small screens.
    #[must_use]
    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new([(name.into(), value.into())])
    }

    /// Applies one transition.
    ///
    /// `UpdateField` naming a field that was not part of the initial
    /// snapshot is ignored: change events can only legitimately originate
    /// from inputs bound to existing fields, so an unknown name is a
    /// programming error, not a user-facing condition. It is logged and
    /// dropped to keep the key set fixed.
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::UpdateField { name, value } => {
                if let Some(slot) = self.fields.get_mut(&name) {
                    *slot = value;
                } else {
                    log::warn!("update for unknown form field {name:?} ignored");
                }
            }
            Transition::Reset => {
                self.fields = self.initial.clone();
            }
        }
    }

    /// Change handler: replaces the named field's value.
    pub fn handle_change(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.apply(Transition::UpdateField {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Restores the initial snapshot, discarding all live edits.
    pub fn reset(&mut self) {
        self.apply(Transition::Reset);
    }

    /// Returns the current value of a field, or `""` for an unknown name.
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }

    /// Returns `true` while the live state equals the initial snapshot.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.fields == self.initial
    }

    /// Iterates over `(name, value)` pairs in field-name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of fields (fixed at construction).
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` for a form constructed with no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_form() -> FormState {
        FormState::single("videoUrl", "")
    }

    #[test]
    fn update_then_reset_round_trip() {
        let mut form = video_form();
        form.handle_change("videoUrl", "https://youtube.com/watch?v=abc");
        assert_eq!(form.value("videoUrl"), "https://youtube.com/watch?v=abc");
        assert!(!form.is_pristine());

        form.reset();
        assert_eq!(form.value("videoUrl"), "");
        assert!(form.is_pristine());
    }

    #[test]
    fn update_leaves_other_fields_untouched() {
        let mut form = FormState::new([("a", "1"), ("b", "2"), ("c", "3")]);
        form.handle_change("b", "edited");
        assert_eq!(form.value("a"), "1");
        assert_eq!(form.value("b"), "edited");
        assert_eq!(form.value("c"), "3");
    }

    #[test]
    fn update_stores_value_verbatim() {
        let mut form = video_form();
        form.handle_change("videoUrl", "  spaced  ");
        assert_eq!(form.value("videoUrl"), "  spaced  ");
    }

    #[test]
    fn unknown_field_update_is_ignored() {
        let mut form = video_form();
        form.handle_change("nope", "value");
        assert_eq!(form.value("nope"), "");
        assert_eq!(form.len(), 1);
        assert!(form.is_pristine());
    }

    #[test]
    fn reset_restores_snapshot_not_current_state() {
        let mut form = FormState::single("videoUrl", "seed");
        form.handle_change("videoUrl", "one");
        form.handle_change("videoUrl", "two");
        form.reset();
        assert_eq!(form.value("videoUrl"), "seed");
    }

    #[test]
    fn reset_is_idempotent() {
        let mut form = video_form();
        form.handle_change("videoUrl", "edited");
        form.reset();
        let once = form.clone();
        form.reset();
        assert_eq!(form, once);
    }

    #[test]
    fn reset_on_pristine_form_is_a_no_op() {
        let mut form = video_form();
        let before = form.clone();
        form.reset();
        assert_eq!(form, before);
    }

    #[test]
    fn value_of_unknown_field_is_empty() {
        let form = video_form();
        assert_eq!(form.value("missing"), "");
    }

    #[test]
    fn fields_iterates_in_name_order() {
        let form = FormState::new([("b", "2"), ("a", "1")]);
        let names: Vec<&str> = form.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn field_names() -> Vec<String> {
            vec!["videoUrl".into(), "title".into(), "notes".into()]
        }

        proptest! {
            /// No sequence of updates adds or removes keys.
            #[test]
            fn key_set_is_preserved(
                edits in proptest::collection::vec((0usize..6, ".{0,20}"), 0..32)
            ) {
                let names = field_names();
                let mut form = FormState::new(
                    names.iter().map(|n| (n.clone(), String::new())),
                );
                for (pick, value) in edits {
                    // Indexes past the known names exercise the
                    // unknown-field branch.
                    let name = names
                        .get(pick)
                        .cloned()
                        .unwrap_or_else(|| format!("ghost{pick}"));
                    form.handle_change(name, value);
                }
                let live: Vec<&str> = form.fields().map(|(n, _)| n).collect();
                prop_assert_eq!(live, vec!["notes", "title", "videoUrl"]);
            }

            /// Reset always yields the initial snapshot.
            #[test]
            fn reset_restores_initial(
                seed in ".{0,20}",
                edits in proptest::collection::vec(".{0,20}", 0..16)
            ) {
                let mut form = FormState::single("videoUrl", seed.clone());
                for value in edits {
                    form.handle_change("videoUrl", value);
                }
                form.reset();
                prop_assert_eq!(form.value("videoUrl"), seed.as_str());
                prop_assert!(form.is_pristine());
            }
        }
    }
}
