/*
 * Copyright 2019 Constantin A. <emoji.builder@c1710.de>
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
 */
//! A module that parses the [Unicode® emoji test file][unicode]
//! into three tables (groups, subgroups, emojis) which reference each other by their IDs.
//!
//! [unicode]: https://unicode.org/Public/emoji/15.1/emoji-test.txt

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::emojis::emoji_status::EmojiStatus;
use crate::tables::errors::{ConvertError, InputError};
use crate::tables::regexes::{classify, LineKind, TestRecord};

/// The ID used for emojis that appear before any group/subgroup header
pub const UNSET_ID: u32 = 0;

/// A top-level category like "Smileys & Emotion"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiGroup {
    pub id: u32,
    pub name: String,
}

/// A category inside of a group like "face-smiling"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiSubgroup {
    pub id: u32,
    #[serde(rename = "groupID")]
    pub group_id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiEntry {
    pub code_points: Vec<String>,
    pub status: String,
    pub emoji_name: String,
    #[serde(rename = "emojiGroupID")]
    pub emoji_group_id: u32,
    #[serde(rename = "emojiSubgroupID")]
    pub emoji_subgroup_id: u32,
}

/// How much of the trailing description becomes the emoji's name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMode {
    /// `smiling face with halo`
    Full,
    /// `smiling`; the same values older versions of the converter produced
    FirstWord,
}

impl Default for NameMode {
    fn default() -> Self {
        NameMode::Full
    }
}

/// The group and subgroup whose headers were read last
#[derive(Debug, Default, Clone, Copy)]
struct ScanScope {
    group: u32,
    subgroup: u32,
}

/// The contents of one `emoji-test.txt`.
///
/// Serializes to `{"groups": [...], "subGroups": [...], "emojis": [...]}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiTables {
    pub groups: Vec<EmojiGroup>,
    #[serde(rename = "subGroups")]
    pub subgroups: Vec<EmojiSubgroup>,
    pub emojis: Vec<EmojiEntry>,
}

impl EmojiTables {
    /// Builds the tables from the lines of an `emoji-test.txt`-like file in a single pass.
    ///
    /// _Please note that this parser is **strict**: the first line that looks like a data record
    /// but doesn't follow the syntax aborts the whole parsing process._
    ///
    /// # Examples
    /// ```
    /// use emoji_tables_json::tables::emoji_tables::{EmojiTables, NameMode};
    ///
    /// let lines = vec![
    ///     "# group: Smileys & Emotion",
    ///     "# subgroup: face-smiling",
    ///     "1F600 ; fully-qualified # 😀 E1.0 grinning face",
    /// ];
    /// let tables = EmojiTables::parse(lines, NameMode::Full).unwrap();
    ///
    /// assert_eq!(tables.groups[0].name, "Smileys & Emotion");
    /// assert_eq!(tables.subgroups[0].group_id, 1);
    /// assert_eq!(tables.emojis[0].code_points, vec!["1F600"]);
    /// assert_eq!(tables.emojis[0].emoji_name, "grinning face");
    /// ```
    pub fn parse<I, S>(lines: I, name_mode: NameMode) -> Result<EmojiTables, ConvertError>
        where I: IntoIterator<Item=S>,
              S: AsRef<str> {
        let mut tables = EmojiTables::default();
        let mut scope = ScanScope::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref().trim_end_matches('\r');
            match classify(line) {
                LineKind::Group(name) => scope = tables.open_group(name),
                LineKind::Subgroup(name) => scope.subgroup = tables.open_subgroup(scope.group, name),
                LineKind::Record(record) => {
                    let record = TestRecord::parse(record)
                        .ok_or_else(|| ConvertError::MalformedRecord {
                            line_number: index + 1,
                            line: line.to_owned()
                        })?;
                    debug!("Parsed:  {:?}", record);
                    tables.add_emoji(&record, scope, name_mode);
                }
                LineKind::Ignored => {}
            }
        }
        Ok(tables)
    }

    /// Reads all lines first, so that a read error never results in half-built tables.
    pub fn from_reader<R: BufRead>(reader: R, name_mode: NameMode, location: &str) -> Result<EmojiTables, ConvertError> {
        let lines = reader.lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| ConvertError::InputUnavailable {
                location: location.to_owned(),
                error: error.into()
            })?;
        Self::parse(lines, name_mode)
    }

    pub fn from_file<P: AsRef<Path>>(path: P, name_mode: NameMode) -> Result<EmojiTables, ConvertError> {
        let path = path.as_ref();
        let location = path.display().to_string();
        let file = File::open(path).map_err(|error| ConvertError::InputUnavailable {
            location: location.clone(),
            error: InputError::Io(error)
        })?;
        Self::from_reader(BufReader::new(file), name_mode, &location)
    }

    /// Starts a new group; the subgroup scope is cleared
    fn open_group(&mut self, name: &str) -> ScanScope {
        let id = self.groups.len() as u32 + 1;
        self.groups.push(EmojiGroup {
            id,
            name: name.to_owned()
        });
        ScanScope {
            group: id,
            subgroup: UNSET_ID
        }
    }

    /// Subgroup IDs continue across groups
    fn open_subgroup(&mut self, group_id: u32, name: &str) -> u32 {
        let id = self.subgroups.len() as u32 + 1;
        self.subgroups.push(EmojiSubgroup {
            id,
            group_id,
            name: name.to_owned()
        });
        id
    }

    fn add_emoji(&mut self, record: &TestRecord, scope: ScanScope, name_mode: NameMode) {
        if let Err(status) = EmojiStatus::from_str(record.status) {
            warn!("Unknown emoji status \"{}\" for {}", status, record.sequence);
        }
        let emoji_name = match name_mode {
            NameMode::Full => record.name,
            NameMode::FirstWord => record.first_name_word()
        };
        self.emojis.push(EmojiEntry {
            code_points: record.code_points().map(str::to_owned).collect(),
            status: record.status.to_owned(),
            emoji_name: emoji_name.to_owned(),
            emoji_group_id: scope.group,
            emoji_subgroup_id: scope.subgroup
        });
    }

    /// The number of emojis per status, in the order the statuses first appear
    pub fn status_summary(&self) -> Vec<(&str, usize)> {
        let mut summary: Vec<(&str, usize)> = Vec::with_capacity(4);
        for entry in &self.emojis {
            match summary.iter_mut().find(|(status, _)| *status == entry.status) {
                Some((_, count)) => *count += 1,
                None => summary.push((entry.status.as_str(), 1))
            }
        }
        summary
    }

    pub fn to_writer<W: Write>(&self, writer: W, pretty: bool) -> Result<(), serde_json::Error> {
        if pretty {
            serde_json::to_writer_pretty(writer, self)
        } else {
            serde_json::to_writer(writer, self)
        }
    }

    /// Writes the JSON to a temporary file next to `path` first and only replaces `path`
    /// once everything has been written.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<(), ConvertError> {
        let path = path.as_ref();
        let unwritable = |error| ConvertError::OutputUnwritable {
            path: path.to_path_buf(),
            error
        };
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new(".")
        };

        let mut temp_file = NamedTempFile::new_in(directory).map_err(unwritable)?;
        self.write_json(&mut temp_file, pretty, path)?;
        temp_file.persist(path).map_err(|error| unwritable(error.error))?;
        Ok(())
    }

    /// Serializes the whole document in memory and writes it in one go;
    /// I/O errors are reported for `path`.
    pub(crate) fn write_json<W: Write>(&self, mut writer: W, pretty: bool, path: &Path) -> Result<(), ConvertError> {
        let json = if pretty {
            serde_json::to_vec_pretty(self)?
        } else {
            serde_json::to_vec(self)?
        };
        writer.write_all(&json)
            .and_then(|_| writer.flush())
            .map_err(|error| ConvertError::OutputUnwritable {
                path: path.to_path_buf(),
                error
            })
    }
}
