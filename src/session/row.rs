//! The flattened output row and its column order.

/// CSV column names, in output order.
pub const COLUMNS: [&str; 11] = [
    "session_id",
    "uri",
    "title",
    "description",
    "language",
    "speakers",
    "start_time",
    "end_time",
    "room",
    "type",
    "tags",
];

/// One extracted session, ready to be written as a CSV record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRow {
    pub session_id: String,
    pub uri: String,
    pub title: String,
    pub description: String,
    pub language: String,
    /// Speaker ids joined with `", "`.
    pub speakers: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub session_type: String,
    /// Tags joined with `", "`.
    pub tags: String,
}

impl SessionRow {
    /// Field values in [`COLUMNS`] order.
    pub fn values(&self) -> [&str; 11] {
        [
            self.session_id.as_str(),
            self.uri.as_str(),
            self.title.as_str(),
            self.description.as_str(),
            self.language.as_str(),
            self.speakers.as_str(),
            self.start_time.as_str(),
            self.end_time.as_str(),
            self.room.as_str(),
            self.session_type.as_str(),
            self.tags.as_str(),
        ]
    }

    /// Whether the row has a title or description worth exporting.
    pub fn has_content(&self) -> bool {
        !self.title.is_empty() || !self.description.is_empty()
    }
}
