// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! MIME types from file extensions.
//!
//! Only the extension is consulted, no file content is read. Unknown
//! extensions map to the empty string, which the library treats like any
//! other non-video type.

use std::path::Path;

const TYPES: &[(&str, &str)] = &[
    // Video
    ("3g2", "video/3gpp2"),
    ("3gp", "video/3gpp"),
    ("avi", "video/x-msvideo"),
    ("flv", "video/x-flv"),
    ("m2ts", "video/mp2t"),
    ("m4v", "video/x-m4v"),
    ("mkv", "video/x-matroska"),
    ("mov", "video/quicktime"),
    ("mp4", "video/mp4"),
    ("mpeg", "video/mpeg"),
    ("mpg", "video/mpeg"),
    ("ogv", "video/ogg"),
    ("ts", "video/mp2t"),
    ("webm", "video/webm"),
    ("wmv", "video/x-ms-wmv"),
    // Common neighbours of video files
    ("aac", "audio/aac"),
    ("flac", "audio/flac"),
    ("m4a", "audio/mp4"),
    ("mp3", "audio/mpeg"),
    ("ogg", "audio/ogg"),
    ("wav", "audio/wav"),
    ("gif", "image/gif"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
    ("nfo", "text/plain"),
    ("txt", "text/plain"),
    ("srt", "application/x-subrip"),
    ("vtt", "text/vtt"),
    ("json", "application/json"),
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
];

pub(crate) fn mime_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return "";
    };
    let ext = ext.to_ascii_lowercase();

    TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_extensions() {
        assert_eq!(mime_type_for(Path::new("a/b.mp4")), "video/mp4");
        assert_eq!(mime_type_for(Path::new("b.MKV")), "video/x-matroska");
        assert_eq!(mime_type_for(Path::new("c.WebM")), "video/webm");
    }

    #[test]
    fn other_and_unknown_extensions() {
        assert_eq!(mime_type_for(Path::new("song.mp3")), "audio/mpeg");
        assert_eq!(mime_type_for(Path::new("subs.srt")), "application/x-subrip");
        assert_eq!(mime_type_for(Path::new("blob.xyz")), "");
        assert_eq!(mime_type_for(Path::new("README")), "");
    }
}
