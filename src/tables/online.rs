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

use crate::tables::errors::{ConvertError, InputError};

pub const EMOJI_TEST: &str = "emoji-test.txt";

/// A simple helper function to build the URL of `emoji-test.txt` for an emoji version.
#[inline]
pub fn build_url(version: (u32, u32)) -> String {
    format!("https://unicode.org/Public/emoji/{}.{}/{}", version.0, version.1, EMOJI_TEST)
}

/// Downloads `emoji-test.txt` for the given version (e.g. `(15, 1)` for Emoji 15.1).
pub fn fetch_emoji_test(version: (u32, u32)) -> Result<std::io::Cursor<bytes::Bytes>, ConvertError> {
    let url = build_url(version);
    info!("Downloading {}", url);
    let unavailable = |error: reqwest::Error| ConvertError::InputUnavailable {
        location: url.clone(),
        error: InputError::from(error)
    };

    let client = reqwest::blocking::ClientBuilder::new()
        .build()
        .map_err(unavailable)?;
    let bytes = client.get(&url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.bytes())
        .map_err(unavailable)?;

    Ok(std::io::Cursor::new(bytes))
}

#[cfg(test)]
mod tests {
    use super::build_url;

    #[test]
    fn test_build_url() {
        assert_eq!(build_url((15, 1)), "https://unicode.org/Public/emoji/15.1/emoji-test.txt");
        assert_eq!(build_url((13, 0)), "https://unicode.org/Public/emoji/13.0/emoji-test.txt");
    }
}
