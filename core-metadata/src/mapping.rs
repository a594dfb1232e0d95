//! Normalized field ↔ native tag key tables.
//!
//! | Field          | ID3v2 | Vorbis comment | RIFF INFO |
//! |----------------|-------|----------------|-----------|
//! | `title`        | TIT2  | TITLE          | INAM      |
//! | `artist`       | TPE1  | ARTIST         | IART      |
//! | `album`        | TALB  | ALBUM          | IPRD      |
//! | `genre`        | TCON  | GENRE          | IGNR      |
//! | `album_artist` | TPE2  | ALBUMARTIST    | -         |
//! | `date`         | TDRC  | DATE           | ICRD      |
//! | `track_number` | TRCK  | TRACKNUMBER    | IPRT      |
//! | `disc_number`  | TPOS  | DISCNUMBER     | -         |
//! | `comment`      | COMM  | COMMENT        | ICMT      |
//!
//! Lyrics live in `USLT` (ID3v2, including the WAV `id3 ` chunk) and in
//! `LYRICS` with a `DESCRIPTION` fallback (Vorbis comments).
//!
//! FLAC and RIFF INFO go through lofty's generic tag API, which translates
//! [`ItemKey`]s to the native keys above. ID3v2 frames are addressed by id
//! through the `id3` crate.

use lofty::tag::ItemKey;

use crate::format::AudioFormat;
use crate::models::SongInfo;

/// Unsynchronized lyrics frame
pub const ID3_LYRICS_FRAME: &str = "USLT";

/// Comment frame; needs language/description handling, not plain text
pub const ID3_COMMENT_FRAME: &str = "COMM";

/// Vorbis keys searched for lyrics, first match wins.
pub const VORBIS_LYRICS_KEYS: [&str; 2] = ["LYRICS", "DESCRIPTION"];

/// One normalized song field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SongField {
    Title,
    Artist,
    Album,
    Genre,
    AlbumArtist,
    Date,
    TrackNumber,
    DiscNumber,
    Comment,
}

impl SongField {
    pub const ALL: [SongField; 9] = [
        SongField::Title,
        SongField::Artist,
        SongField::Album,
        SongField::Genre,
        SongField::AlbumArtist,
        SongField::Date,
        SongField::TrackNumber,
        SongField::DiscNumber,
        SongField::Comment,
    ];

    /// Field name as used in [`SongInfo`]
    pub fn name(self) -> &'static str {
        match self {
            SongField::Title => "title",
            SongField::Artist => "artist",
            SongField::Album => "album",
            SongField::Genre => "genre",
            SongField::AlbumArtist => "album_artist",
            SongField::Date => "date",
            SongField::TrackNumber => "track_number",
            SongField::DiscNumber => "disc_number",
            SongField::Comment => "comment",
        }
    }

    /// Native key for this field in `format`'s tag scheme, if it has one.
    pub fn native_key(self, format: AudioFormat) -> Option<&'static str> {
        match format {
            AudioFormat::Mp3 => Some(self.id3_frame()),
            AudioFormat::Flac => Some(self.vorbis_key()),
            AudioFormat::Wav => self.riff_key(),
        }
    }

    pub fn id3_frame(self) -> &'static str {
        match self {
            SongField::Title => "TIT2",
            SongField::Artist => "TPE1",
            SongField::Album => "TALB",
            SongField::Genre => "TCON",
            SongField::AlbumArtist => "TPE2",
            SongField::Date => "TDRC",
            SongField::TrackNumber => "TRCK",
            SongField::DiscNumber => "TPOS",
            SongField::Comment => ID3_COMMENT_FRAME,
        }
    }

    pub fn vorbis_key(self) -> &'static str {
        match self {
            SongField::Title => "TITLE",
            SongField::Artist => "ARTIST",
            SongField::Album => "ALBUM",
            SongField::Genre => "GENRE",
            SongField::AlbumArtist => "ALBUMARTIST",
            SongField::Date => "DATE",
            SongField::TrackNumber => "TRACKNUMBER",
            SongField::DiscNumber => "DISCNUMBER",
            SongField::Comment => "COMMENT",
        }
    }

    /// RIFF INFO has no album artist or disc number.
    pub fn riff_key(self) -> Option<&'static str> {
        match self {
            SongField::Title => Some("INAM"),
            SongField::Artist => Some("IART"),
            SongField::Album => Some("IPRD"),
            SongField::Genre => Some("IGNR"),
            SongField::Date => Some("ICRD"),
            SongField::TrackNumber => Some("IPRT"),
            SongField::Comment => Some("ICMT"),
            SongField::AlbumArtist | SongField::DiscNumber => None,
        }
    }

    /// Generic lofty key that lofty maps onto the Vorbis / RIFF keys above.
    pub(crate) fn item_key(self) -> ItemKey {
        match self {
            SongField::Title => ItemKey::TrackTitle,
            SongField::Artist => ItemKey::TrackArtist,
            SongField::Album => ItemKey::AlbumTitle,
            SongField::Genre => ItemKey::Genre,
            SongField::AlbumArtist => ItemKey::AlbumArtist,
            SongField::Date => ItemKey::RecordingDate,
            SongField::TrackNumber => ItemKey::TrackNumber,
            SongField::DiscNumber => ItemKey::DiscNumber,
            SongField::Comment => ItemKey::Comment,
        }
    }

    pub fn get(self, info: &SongInfo) -> Option<&str> {
        match self {
            SongField::Title => info.title.as_deref(),
            SongField::Artist => info.artist.as_deref(),
            SongField::Album => info.album.as_deref(),
            SongField::Genre => info.genre.as_deref(),
            SongField::AlbumArtist => info.album_artist.as_deref(),
            SongField::Date => info.date.as_deref(),
            SongField::TrackNumber => info.track_number.as_deref(),
            SongField::DiscNumber => info.disc_number.as_deref(),
            SongField::Comment => info.comment.as_deref(),
        }
    }

    pub fn set(self, info: &mut SongInfo, value: Option<String>) {
        let slot = match self {
            SongField::Title => &mut info.title,
            SongField::Artist => &mut info.artist,
            SongField::Album => &mut info.album,
            SongField::Genre => &mut info.genre,
            SongField::AlbumArtist => &mut info.album_artist,
            SongField::Date => &mut info.date,
            SongField::TrackNumber => &mut info.track_number,
            SongField::DiscNumber => &mut info.disc_number,
            SongField::Comment => &mut info.comment,
        };
        *slot = value;
    }
}

/// Generic lofty key under which a native Vorbis lyrics key is stored.
///
/// lofty maps `LYRICS` to [`ItemKey::Lyrics`] but has no generic key for
/// `DESCRIPTION`; that one stays `ItemKey::Unknown("DESCRIPTION")`.
pub(crate) fn vorbis_lyrics_item_key(native: &str) -> ItemKey {
    match native {
        "LYRICS" => ItemKey::Lyrics,
        other => ItemKey::Unknown(other.to_string()),
    }
}

/// Whether a generic item key stands for the native Vorbis lyrics key
/// `native`. Vorbis field names are case-insensitive.
pub(crate) fn is_vorbis_lyrics_key(key: &ItemKey, native: &str) -> bool {
    match key {
        ItemKey::Unknown(name) => name.eq_ignore_ascii_case(native),
        known => *known == vorbis_lyrics_item_key(native),
    }
}
