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
 */

use std::fs;
use std::path::PathBuf;

use crate::config::{ConversionConfig, InputSource, parse_version, DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::tables::emoji_tables::{EmojiTables, NameMode};
use crate::tables::errors::ConvertError;

const TEST_FILE: &str = "test_files/tables/emoji-test.txt";
const MALFORMED_FILE: &str = "test_files/tables/emoji-test-malformed.txt";

const GROUPS: usize = 4;
const SUBGROUPS: usize =
    // Smileys & Emotion
      2
    // People & Body
    + 2
    // Component
    + 2
    // Symbols
    + 1;
const EMOJIS: usize = 6 + 3 + 2 + 2;

fn config(input: &str, output: PathBuf) -> ConversionConfig {
    ConversionConfig {
        input: InputSource::File(PathBuf::from(input)),
        output,
        ..ConversionConfig::default()
    }
}

#[test]
fn test_convert_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("emojis.json");

    let tables = config(TEST_FILE, output.clone()).run().unwrap();
    assert_eq!(tables.groups.len(), GROUPS);
    assert_eq!(tables.subgroups.len(), SUBGROUPS);
    assert_eq!(tables.emojis.len(), EMOJIS);

    let json: serde_json::Value = serde_json::from_slice(&fs::read(&output).unwrap()).unwrap();
    assert_eq!(json["groups"].as_array().unwrap().len(), GROUPS);
    assert_eq!(json["subGroups"].as_array().unwrap().len(), SUBGROUPS);
    assert_eq!(json["emojis"].as_array().unwrap().len(), EMOJIS);

    // 👨‍👩‍👦 is the only emoji in "family"
    let family = &json["emojis"][8];
    assert_eq!(family["codePoints"], serde_json::json!(["1F468", "200D", "1F469", "200D", "1F466"]));
    assert_eq!(family["emojiName"], "family: man, woman, boy");
    assert_eq!(family["emojiGroupID"], 2);
    assert_eq!(family["emojiSubgroupID"], 4);
    assert_eq!(json["subGroups"][3]["name"], "family");
    assert_eq!(json["subGroups"][3]["groupID"], 2);

    // Subgroup IDs continue in the next group
    assert_eq!(json["subGroups"][4]["id"], 5);
    assert_eq!(json["subGroups"][4]["groupID"], 3);
}

#[test]
fn test_every_emoji_references_existing_tables() {
    let tables = EmojiTables::from_file(TEST_FILE, NameMode::Full).unwrap();

    for emoji in &tables.emojis {
        let subgroup = tables.subgroups.iter()
            .find(|subgroup| subgroup.id == emoji.emoji_subgroup_id)
            .unwrap();
        assert_eq!(subgroup.group_id, emoji.emoji_group_id);
        assert!(tables.groups.iter().any(|group| group.id == emoji.emoji_group_id));
    }
}

#[test]
fn test_compatible_names() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(TEST_FILE, dir.path().join("emojis.json"));
    config.name_mode = NameMode::FirstWord;

    let tables = config.run().unwrap();
    assert_eq!(tables.emojis[0].emoji_name, "grinning");
    assert_eq!(tables.emojis[3].emoji_name, "smiling");
}

#[test]
fn test_same_output_twice() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    config(TEST_FILE, first.clone()).run().unwrap();
    config(TEST_FILE, second.clone()).run().unwrap();

    assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
}

#[test]
fn test_malformed_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("emojis.json");

    let result = config(MALFORMED_FILE, output.clone()).run();
    assert!(matches!(result, Err(ConvertError::MalformedRecord { line_number: 5, .. })));
    assert!(!output.exists());
    // Not even a temporary file is left behind
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("emojis.json");
    let input = dir.path().join("does-not-exist.txt");

    let result = config(input.to_str().unwrap(), output.clone()).run();
    match result {
        Err(ConvertError::InputUnavailable { location, .. }) => assert_eq!(location, input.display().to_string()),
        other => panic!("Expected missing input, got {:?}", other)
    }
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing-dir").join("emojis.json");

    let result = config(TEST_FILE, output.clone()).run();
    assert!(matches!(result, Err(ConvertError::OutputUnwritable { .. })));
    assert!(!output.exists());
}

#[test]
fn test_pretty_output() {
    let dir = tempfile::tempdir().unwrap();
    let compact = dir.path().join("compact.json");
    let pretty = dir.path().join("pretty.json");

    config(TEST_FILE, compact.clone()).run().unwrap();
    let mut pretty_config = config(TEST_FILE, pretty.clone());
    pretty_config.pretty = true;
    pretty_config.run().unwrap();

    let compact = fs::read_to_string(compact).unwrap();
    let pretty = fs::read_to_string(pretty).unwrap();
    assert!(!compact.contains('\n'));
    assert!(pretty.contains('\n'));

    let compact: serde_json::Value = serde_json::from_str(&compact).unwrap();
    let pretty: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(compact, pretty);
}

#[test]
fn test_command_line() {
    let matches = ConversionConfig::app().get_matches_from(vec!["emoji_tables_json"]);
    assert_eq!(ConversionConfig::from_matches(&matches).unwrap(), ConversionConfig::default());
    assert_eq!(ConversionConfig::default().input, InputSource::File(PathBuf::from(DEFAULT_INPUT)));
    assert_eq!(ConversionConfig::default().output, PathBuf::from(DEFAULT_OUTPUT));

    let matches = ConversionConfig::app().get_matches_from(vec![
        "emoji_tables_json", "-i", "in.txt", "--output", "out.json", "--pretty", "--first-word-names"
    ]);
    let config = ConversionConfig::from_matches(&matches).unwrap();
    assert_eq!(config.input, InputSource::File(PathBuf::from("in.txt")));
    assert_eq!(config.output, PathBuf::from("out.json"));
    assert!(config.pretty);
    assert_eq!(config.name_mode, NameMode::FirstWord);
}

#[test]
fn test_parse_version() {
    assert_eq!(parse_version("15.1"), Ok((15, 1)));
    assert_eq!(parse_version("13"), Ok((13, 0)));
    assert!(parse_version("E15.1").is_err());
    assert!(parse_version("15.x").is_err());
}
