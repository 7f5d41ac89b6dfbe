/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 */


use regex::{Regex, Captures};

pub const GROUP_MARKER: &str = "# group:";
pub const SUBGROUP_MARKER: &str = "# subgroup:";
const COMMENT_MARKER: char = '#';
const FIELD_SEPARATOR: char = ';';

/// What a single line of `emoji-test.txt` is about
#[derive(Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `# group: <name>`, with the name already trimmed
    Group(&'a str),
    /// `# subgroup: <name>`, with the name already trimmed
    Subgroup(&'a str),
    /// Anything that is not a comment and has a `;` in it
    Record(&'a str),
    /// Empty lines, comments, version headers, etc.
    Ignored,
}

/// Classifies a line; the first matching rule wins:
/// group header, subgroup header, data record, everything else.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(name) = line.strip_prefix(GROUP_MARKER) {
        LineKind::Group(name.trim())
    } else if let Some(name) = line.strip_prefix(SUBGROUP_MARKER) {
        LineKind::Subgroup(name.trim())
    } else if !line.starts_with(COMMENT_MARKER) && line.contains(FIELD_SEPARATOR) {
        LineKind::Record(line)
    } else {
        LineKind::Ignored
    }
}

/// A data record from `emoji-test.txt`, borrowing from the line it was parsed from.
#[derive(Debug)]
pub struct TestRecord<'a> {
    pub sequence: &'a str,
    pub status: &'a str,
    /// The rendered emoji itself
    pub emoji: &'a str,
    /// The version without the leading `E`
    pub version: &'a str,
    /// Everything after the version
    pub name: &'a str
}

impl<'a> TestRecord<'a> {
    /// The codepoints exactly as they are written in the file
    pub fn code_points(&self) -> impl Iterator<Item=&'a str> {
        self.sequence.split_whitespace()
    }

    /// Only the first word of the name, as the legacy converter wrote it
    pub fn first_name_word(&self) -> &'a str {
        self.name.split_whitespace().next().unwrap_or_default()
    }

    pub fn parse(line: &'a str) -> Option<Self> {
        test_regex().captures(line).map(Self::from)
    }
}

impl<'a> From<Captures<'a>> for TestRecord<'a> {
    fn from(captures: Captures<'a>) -> Self {
        let get = |name: &str| captures.name(name).map_or("", |match_| match_.as_str());

        Self {
            sequence: get("sequence"),
            status: get("status"),
            emoji: get("emoji"),
            version: get("version"),
            name: get("name")
        }
    }
}

const EMOJI_SEQUENCE_SPACE_REGEX: &str = r"(?P<sequence>([A-F0-9a-f]{1,8})(\s+([A-F0-9a-f]{1,8}))*)";
const EMOJI_STATUS_REGEX: &str = r"(?P<status>[^\s#;]+)";
const EMOJI_NAME_REGEX: &str = r"(?P<emoji>\S+)\s+E(?P<version>\d+\.\d+)\s+(?P<name>.*\S)";

/// The syntax of these lines is:
/// `Codepoint(s) ; Status # Emoji "E"Version Emoji name`
pub fn test_regex() -> &'static Regex {
    lazy_static! {
            static ref EMOJI_TEST_REGEX: Regex = Regex::new(&format!(r"^\s*{}\s*;\s*{}\s*#\s*{}\s*$",
                                               EMOJI_SEQUENCE_SPACE_REGEX,
                                               EMOJI_STATUS_REGEX,
                                               EMOJI_NAME_REGEX)
            ).unwrap();
    };
    &*EMOJI_TEST_REGEX
}
