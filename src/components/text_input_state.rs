/// Editing state of a single-line field: the value and a caret counted in chars.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InputState {
    pub value: String,
    pub caret: usize,
}

impl InputState {
    pub fn new(value: impl Into<String>, caret: usize) -> Self {
        let value = value.into();
        let caret = caret.min(value.chars().count());
        Self { value, caret }
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn move_left(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.caret >= self.len() {
            return false;
        }
        self.caret += 1;
        true
    }

    pub fn move_home(&mut self) -> bool {
        let moved = self.caret != 0;
        self.caret = 0;
        moved
    }

    pub fn move_end(&mut self) -> bool {
        let len = self.len();
        let moved = self.caret != len;
        self.caret = len;
        moved
    }

    pub fn delete_backward(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.replace_char_range(self.caret - 1, self.caret, "");
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.caret >= self.len() {
            return false;
        }
        self.replace_char_range(self.caret, self.caret + 1, "");
        true
    }

    /// Line breaks are dropped; the field is single-line.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let sanitized = text.replace(['\r', '\n'], "");
        if sanitized.is_empty() {
            return false;
        }
        self.replace_char_range(self.caret, self.caret, &sanitized);
        true
    }

    pub fn clamp_to_max_length(&mut self, max_length: Option<usize>) -> bool {
        let Some(limit) = max_length else {
            return false;
        };
        if self.len() <= limit {
            return false;
        }
        self.value = self.value.chars().take(limit).collect();
        self.caret = self.caret.min(limit);
        true
    }

    /// Splits the value at the caret, for drawing the caret between both halves.
    pub fn split_at_caret(&self) -> (String, String) {
        let byte_index = byte_index_at_char(&self.value, self.caret);
        let (left, right) = self.value.split_at(byte_index);
        (left.to_string(), right.to_string())
    }

    fn replace_char_range(&mut self, start: usize, end: usize, insert: &str) {
        let len = self.len();
        let start = start.min(len);
        let end = end.min(len).max(start);
        let byte_start = byte_index_at_char(&self.value, start);
        let byte_end = byte_index_at_char(&self.value, end);
        self.value.replace_range(byte_start..byte_end, insert);
        self.caret = start + insert.chars().count();
    }
}

fn byte_index_at_char(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map(|(index, _)| index)
        .unwrap_or(value.len())
}
