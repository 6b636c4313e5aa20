//! Exercise model - a single movement with its demonstration media.

use serde::{Deserialize, Serialize};
use crate::id::ExerciseId;
use crate::media;

/// An exercise referenced by workouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier
    pub id: ExerciseId,

    /// Display title
    pub title: String,

    /// Demonstration media, first entry is the primary one
    #[serde(default)]
    pub images: Vec<ExerciseMedia>,

    /// Targeted muscles
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub muscles: Vec<String>,

    /// How to perform the movement
    #[serde(default)]
    pub description: String,
}

impl Exercise {
    /// Create an exercise with a single media entry.
    pub fn new(id: impl Into<String>, title: impl Into<String>, media_url: impl Into<String>) -> Self {
        Self {
            id: ExerciseId::new(id),
            title: title.into(),
            images: vec![ExerciseMedia::new(media_url)],
            muscles: Vec::new(),
            description: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Primary media entry, if any.
    pub fn primary_media(&self) -> Option<&ExerciseMedia> {
        self.images.first()
    }
}

/// A media entry (image, gif or video) for an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseMedia {
    /// Media location, relative path or absolute URL
    pub url: String,

    /// Optional crop applied when rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<CropRect>,
}

impl ExerciseMedia {
    /// Media entry without crop.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            crop: None,
        }
    }

    /// Attach a crop rectangle.
    pub fn with_crop(mut self, crop: CropRect) -> Self {
        self.crop = Some(crop);
        self
    }

    /// Whether the media is a video container.
    pub fn is_video(&self) -> bool {
        media::is_video_format(&self.url)
    }

    /// Whether the media moves (video or gif).
    pub fn is_animated(&self) -> bool {
        media::is_animated_format(&self.url)
    }

    /// Coarse media kind.
    pub fn kind(&self) -> MediaKind {
        if self.is_video() {
            MediaKind::Video
        } else if self.is_animated() {
            MediaKind::Animation
        } else {
            MediaKind::Image
        }
    }
}

/// Crop rectangle, all values in percent of the source media.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    /// Horizontal offset
    pub x: f32,
    /// Vertical offset
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

/// Kind of exercise media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    /// Still image
    Image,
    /// Animated image (gif)
    Animation,
    /// Video container
    Video,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MediaKind::Image => "image",
            MediaKind::Animation => "animation",
            MediaKind::Video => "video",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind() {
        assert_eq!(ExerciseMedia::new("/exercise-video/pushup.webm").kind(), MediaKind::Video);
        assert_eq!(ExerciseMedia::new("/img/hang.GIF").kind(), MediaKind::Animation);
        assert_eq!(
            ExerciseMedia::new("https://image.boxrox.com/2023/07/Dead-hang-1024x580.jpg").kind(),
            MediaKind::Image
        );
    }

    #[test]
    fn test_deserialize_exercise_with_crop() {
        let json = r#"{
            "id": "d4f55277-e441-4266-9b1f-df8d26ab3d96",
            "title": "Scapula Push-ups",
            "images": [{"url": "/exercise-video/scapula-push-ups.webm",
                        "crop": {"x": 0, "y": 100, "width": 100, "height": 0}}],
            "description": "In plank position"
        }"#;
        let exercise: Exercise = serde_json::from_str(json).unwrap();
        assert!(exercise.muscles.is_empty());
        let crop = exercise.primary_media().and_then(|m| m.crop).unwrap();
        assert_eq!(crop.y, 100.0);
        assert_eq!(crop.height, 0.0);
    }

    #[test]
    fn test_exercise_without_media() {
        let json = r#"{"id": "x", "title": "Mystery"}"#;
        let exercise: Exercise = serde_json::from_str(json).unwrap();
        assert!(exercise.primary_media().is_none());
        assert_eq!(exercise.description, "");
    }
}
