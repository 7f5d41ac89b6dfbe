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
//! Converts the Unicode® `emoji-test.txt` into a JSON document with three tables:
//! groups, subgroups and emojis.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// Emoji metadata as it appears in `emoji-test.txt`
pub mod emojis;
/// Parsing `emoji-test.txt` into group, subgroup and emoji tables
pub mod tables;
/// The conversion job as configured on the command line
pub mod config;


#[cfg(test)]
mod tests;
