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

use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};

use crate::tables::emoji_tables::{EmojiTables, NameMode};
use crate::tables::errors::ConvertError;

pub const DEFAULT_INPUT: &str = "emoji-test.txt";
pub const DEFAULT_OUTPUT: &str = "emojis.json";

/// Where `emoji-test.txt` comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    /// Download it from unicode.org for the given emoji version
    #[cfg(feature = "online")]
    Online((u32, u32)),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    pub input: InputSource,
    pub output: PathBuf,
    /// Indent the JSON output
    pub pretty: bool,
    pub name_mode: NameMode,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            input: InputSource::File(PathBuf::from(DEFAULT_INPUT)),
            output: PathBuf::from(DEFAULT_OUTPUT),
            pretty: false,
            name_mode: NameMode::default()
        }
    }
}

impl ConversionConfig {
    pub fn app<'a, 'b>() -> App<'a, 'b> {
        let app = App::new("emoji_tables_json")
            .version("0.1.0")
            .author("Constantin A. <emoji.builder@c1710.de>")
            .about("Converts Unicode's emoji-test.txt into a JSON file with groups, subgroups and emojis")
            .arg(Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("FILE")
                .help("The emoji-test.txt to read")
                .takes_value(true)
                .default_value(DEFAULT_INPUT)
                .required(false))
            .arg(Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Where to write the JSON file")
                .takes_value(true)
                .default_value(DEFAULT_OUTPUT)
                .required(false))
            .arg(Arg::with_name("pretty")
                .short("p")
                .long("pretty")
                .help("Indent the JSON output")
                .takes_value(false)
                .required(false))
            .arg(Arg::with_name("first_word_names")
                .long("first-word-names")
                .help("Only keep the first word of each emoji name")
                .long_help("Only keep the first word of each emoji name. \
                The names then have the same values as in the output of older versions of this converter.")
                .takes_value(false)
                .required(false));

        #[cfg(feature = "online")]
        let app = app.arg(Arg::with_name("emoji_version")
            .long("emoji-version")
            .value_name("X.Y")
            .help("Download emoji-test.txt for this emoji version instead of reading --input")
            .takes_value(true)
            .validator(|version| parse_version(&version).map(|_| ()))
            .required(false));

        app
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Self, String> {
        let input = InputSource::File(PathBuf::from(matches.value_of("input").unwrap_or(DEFAULT_INPUT)));
        #[cfg(feature = "online")]
        let input = match matches.value_of("emoji_version") {
            Some(version) => InputSource::Online(parse_version(version)?),
            None => input
        };

        let name_mode = if matches.is_present("first_word_names") {
            NameMode::FirstWord
        } else {
            NameMode::Full
        };

        Ok(Self {
            input,
            output: PathBuf::from(matches.value_of("output").unwrap_or(DEFAULT_OUTPUT)),
            pretty: matches.is_present("pretty"),
            name_mode
        })
    }

    /// Loads and parses the input completely before anything is written,
    /// so that a failure leaves no output behind.
    pub fn run(&self) -> Result<EmojiTables, ConvertError> {
        let tables = match &self.input {
            InputSource::File(path) => {
                info!("Reading {}", path.display());
                EmojiTables::from_file(path, self.name_mode)?
            },
            #[cfg(feature = "online")]
            InputSource::Online(version) => {
                let reader = crate::tables::online::fetch_emoji_test(*version)?;
                EmojiTables::from_reader(reader, self.name_mode, &crate::tables::online::build_url(*version))?
            }
        };

        tables.status_summary().iter()
            .for_each(|(status, count)| info!("{}: {}", status, count));

        tables.write_to_path(&self.output, self.pretty)?;
        info!("Wrote {}", self.output.display());
        Ok(tables)
    }
}

/// Parses an emoji version like `15.1`
pub fn parse_version(version: &str) -> Result<(u32, u32), String> {
    let mut parts = version.trim().splitn(2, '.');
    let major = parts.next().and_then(|major| major.parse().ok());
    let minor = parts.next().map_or(Some(0), |minor| minor.parse().ok());
    match (major, minor) {
        (Some(major), Some(minor)) => Ok((major, minor)),
        _ => Err(format!("Invalid emoji version: {}", version))
    }
}
