// src/model.rs
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

/// Movie record as returned by `GET /movie/movies/{id}`. Unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MovieDetail {
    #[serde(default, deserialize_with = "string_or_null")]
    pub title: String,
    #[serde(
        rename = "publishingYear",
        default,
        deserialize_with = "year_from_number_or_string"
    )]
    pub publishing_year: Option<i32>,
}

fn string_or_null<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

// The backend stores whatever the multipart form sent, so the year shows up as either.
fn year_from_number_or_string<'de, D>(de: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Num(i64),
        Text(String),
    }

    match Option::<Year>::deserialize(de)? {
        None => Ok(None),
        Some(Year::Num(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("publishingYear {n} out of range"))),
        Some(Year::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i32>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("publishingYear `{s}` is not a number")))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PosterSource {
    Path(PathBuf),
    Bytes(Arc<[u8]>),
}

/// A poster picked by drop or file dialog; read lazily when the update is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PosterFile {
    pub name: String,
    pub source: PosterSource,
}

impl PosterFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            source: PosterSource::Path(path),
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Arc<[u8]>) -> Self {
        Self {
            name: name.into(),
            source: PosterSource::Bytes(bytes),
        }
    }

    pub fn read_bytes(&self) -> io::Result<Vec<u8>> {
        match &self.source {
            PosterSource::Path(p) => fs::read(p),
            PosterSource::Bytes(b) => Ok(b.to_vec()),
        }
    }

    pub fn mime(&self) -> String {
        mime_guess::from_path(&self.name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}

/// Snapshot sent as `PATCH /movie/movies/{id}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieUpdate {
    pub user_id: String,
    pub title: String,
    pub publishing_year: i32,
    pub poster: Option<PosterFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_year_and_ignores_extras() {
        let d: MovieDetail = serde_json::from_str(
            r#"{"_id":"42","title":"Inception","publishingYear":2010,"poster":"uploads/a.png","userid":"u"}"#,
        )
        .unwrap();
        assert_eq!(d.title, "Inception");
        assert_eq!(d.publishing_year, Some(2010));
    }

    #[test]
    fn object_poster_reference_is_ignored() {
        let d: MovieDetail = serde_json::from_str(
            r#"{"title":"Heat","publishingYear":1995,"poster":{"url":"uploads/heat.png"}}"#,
        )
        .unwrap();
        assert_eq!(d.title, "Heat");
        assert_eq!(d.publishing_year, Some(1995));
    }

    #[test]
    fn null_title_decodes_empty() {
        let d: MovieDetail =
            serde_json::from_str(r#"{"title":null,"publishingYear":1995}"#).unwrap();
        assert_eq!(d.title, "");
        assert_eq!(d.publishing_year, Some(1995));
    }

    #[test]
    fn decodes_string_year() {
        let d: MovieDetail =
            serde_json::from_str(r#"{"title":"Heat","publishingYear":" 1995 "}"#).unwrap();
        assert_eq!(d.publishing_year, Some(1995));
    }

    #[test]
    fn missing_fields_decode_empty() {
        let d: MovieDetail = serde_json::from_str("{}").unwrap();
        assert_eq!(d, MovieDetail::default());
        let d: MovieDetail = serde_json::from_str(r#"{"publishingYear":null}"#).unwrap();
        assert_eq!(d.publishing_year, None);
    }

    #[test]
    fn rejects_non_numeric_year() {
        assert!(serde_json::from_str::<MovieDetail>(r#"{"publishingYear":"soon"}"#).is_err());
    }

    #[test]
    fn poster_name_comes_from_path() {
        let p = PosterFile::from_path(PathBuf::from("/tmp/posters/dune.JPG"));
        assert_eq!(p.name, "dune.JPG");
        assert_eq!(p.mime(), "image/jpeg");
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        let p = PosterFile::from_bytes("blob", Arc::from(&b"xyz"[..]));
        assert_eq!(p.mime(), "application/octet-stream");
        assert_eq!(p.read_bytes().unwrap(), b"xyz");
    }
}
