use chrono::{Local, NaiveDate};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, Result};

/// 一张照片
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    #[serde(rename = "src")]
    pub source: String,
    #[serde(rename = "alt", default)]
    pub alt_text: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub label: String,
}

impl PhotoRecord {
    pub fn new(source: &str, alt_text: &str, caption: &str, label: &str) -> Self {
        Self {
            source: source.to_string(),
            alt_text: alt_text.to_string(),
            caption: caption.to_string(),
            label: label.to_string(),
        }
    }
}

/// TOML文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryData {
    #[serde(default)]
    pub meta: GalleryMeta,
    #[serde(default)]
    pub photos: Vec<PhotoRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryMeta {
    pub title: String,
    pub subtitle: String,
    /// 纪念日，支持 TOML 日期 (2025-08-14) 和字符串 ("2025-08-14")
    #[serde(deserialize_with = "deserialize_date")]
    pub since: Option<NaiveDate>,
}

impl Default for GalleryMeta {
    fn default() -> Self {
        Self {
            title: "Our 1st Monthsary".to_string(),
            subtitle: "Celebrating our beautiful first month together".to_string(),
            since: None,
        }
    }
}

fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<toml::Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(toml::Value::String(text)) => text.parse().map(Some).map_err(D::Error::custom),
        Some(toml::Value::Datetime(datetime)) => {
            let date = datetime
                .date
                .ok_or_else(|| D::Error::custom(format!("{datetime} has no date part")))?;
            NaiveDate::from_ymd_opt(date.year.into(), date.month.into(), date.day.into())
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date {date}")))
        }
        Some(other) => Err(D::Error::custom(format!(
            "expected a date, found {}",
            other.type_str()
        ))),
    }
}

impl GalleryMeta {
    /// 距纪念日的天数
    pub fn days_since(&self) -> Option<i64> {
        let since = self.since?;
        let days = (Local::now().date_naive() - since).num_days();
        Some(days.max(0))
    }
}

impl Default for GalleryData {
    fn default() -> Self {
        Self {
            meta: GalleryMeta::default(),
            photos: builtin_photos(),
        }
    }
}

fn builtin_photos() -> Vec<PhotoRecord> {
    vec![
        PhotoRecord::new(
            "attached_assets/a33d88ae-62a0-4480-a8ef-721780aa009b_1757853854190.jpg",
            "Our first date",
            "Our very first date together",
            "First Date",
        ),
        PhotoRecord::new(
            "attached_assets/50c984bc-3189-43de-b9d0-d592c2dd2d1b_1757853872937.jpg",
            "Second date in SM Dasma",
            "Our 2nd date in SM Dasma",
            "Second Date",
        ),
        PhotoRecord::new(
            "attached_assets/43f1f4ef-a1ce-4983-8c7b-f7eea7e4e865_1757853934196.jpg",
            "First movie date",
            "Our first movie date",
            "Movie Night",
        ),
        PhotoRecord::new(
            "attached_assets/597d970f-6724-4caa-9376-30bda339bfa4_1757853969146.jpg",
            "Eating matcha chocolate",
            "Us eating matcha chocolate",
            "Sweet Moment",
        ),
        PhotoRecord::new(
            "attached_assets/e3dd1f2c-bb57-4cbb-aa89-88c09ab2a9c0_1757854010587.jpg",
            "Our favorite edit",
            "My favorite edit of our pictures",
            "Special Memory",
        ),
    ]
}

/// 运行时相册（有序、非空、只读）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    photos: Vec<PhotoRecord>,
}

impl Gallery {
    pub fn new(photos: Vec<PhotoRecord>) -> Result<Self> {
        if photos.is_empty() {
            return Err(AppError::EmptyGallery);
        }
        Ok(Self { photos })
    }

    pub fn from_data(data: &GalleryData) -> Result<Self> {
        Self::new(data.photos.clone())
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn get(&self, index: usize) -> Option<&PhotoRecord> {
        self.photos.get(index)
    }

    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_gallery() {
        let gallery = Gallery::from_data(&GalleryData::default()).unwrap();
        assert_eq!(gallery.len(), 5);
        assert_eq!(gallery.get(0).unwrap().label, "First Date");
        assert_eq!(gallery.get(4).unwrap().caption, "My favorite edit of our pictures");
        assert!(gallery.get(5).is_none());
    }

    #[test]
    fn test_empty_gallery_rejected() {
        assert!(matches!(Gallery::new(Vec::new()), Err(AppError::EmptyGallery)));
    }

    #[test]
    fn test_parse_gallery_toml() {
        let content = r#"
            [meta]
            title = "Trip"
            since = "2025-08-14"

            [[photos]]
            src = "a.jpg"
            alt = "Beach"
            caption = "At the beach"
            label = "Day 1"

            [[photos]]
            src = "b.jpg"
        "#;
        let data: GalleryData = toml::from_str(content).unwrap();
        assert_eq!(data.meta.title, "Trip");
        assert_eq!(data.meta.since, NaiveDate::from_ymd_opt(2025, 8, 14));
        assert_eq!(data.meta.subtitle, GalleryMeta::default().subtitle);
        assert_eq!(data.photos.len(), 2);
        assert_eq!(data.photos[0].alt_text, "Beach");
        assert_eq!(data.photos[1].source, "b.jpg");
        assert!(data.photos[1].caption.is_empty());
    }

    #[test]
    fn test_native_toml_date() {
        let content = r#"
            [meta]
            since = 2025-08-14

            [[photos]]
            src = "a.jpg"
        "#;
        let data: GalleryData = toml::from_str(content).unwrap();
        assert_eq!(data.meta.since, NaiveDate::from_ymd_opt(2025, 8, 14));
    }

    #[test]
    fn test_invalid_date_rejected() {
        assert!(toml::from_str::<GalleryData>("[meta]\nsince = \"someday\"").is_err());
        assert!(toml::from_str::<GalleryData>("[meta]\nsince = 12:30:00").is_err());
        assert!(toml::from_str::<GalleryData>("[meta]\nsince = 3").is_err());
    }

    #[test]
    fn test_days_since() {
        use chrono::Duration;

        let mut meta = GalleryMeta::default();
        assert_eq!(meta.days_since(), None);

        meta.since = Some(Local::now().date_naive() - Duration::days(30));
        assert_eq!(meta.days_since(), Some(30));

        meta.since = Some(Local::now().date_naive() + Duration::days(3));
        assert_eq!(meta.days_since(), Some(0));
    }
}
