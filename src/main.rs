/*
 * Copyright 2019 Constantin A.
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

#[macro_use]
extern crate log;

use std::process::exit;

use emoji_tables_json::config::ConversionConfig;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("emoji_tables_json=info")
    ).init();

    let matches = ConversionConfig::app().get_matches();
    let config = match ConversionConfig::from_matches(&matches) {
        Ok(config) => config,
        Err(error) => {
            error!("{}", error);
            exit(1);
        }
    };

    match config.run() {
        Ok(tables) => {
            println!("emojiGroups: {}", tables.groups.len());
            println!("emojiSubgroups: {}", tables.subgroups.len());
            println!("emojis: {}", tables.emojis.len());
        }
        Err(error) => {
            error!("{}", error);
            exit(1);
        }
    }
}
