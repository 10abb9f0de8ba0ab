use serde::{Deserialize, Serialize};

/// Shape kinds the annotation server reports. Only `Polyline` is
/// reconstructed; the rest pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Rectangle,
    Polygon,
    Polyline,
    Points,
    Ellipse,
    Cuboid,
    Mask,
    Skeleton,
    #[serde(other)]
    Unknown,
}

/// Which physical face the four annotated corners describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceCode {
    One,
    Two,
    Three,
    Four,
}

impl FaceCode {
    pub const ALL: [FaceCode; 4] = [FaceCode::One, FaceCode::Two, FaceCode::Three, FaceCode::Four];

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "1" => Some(FaceCode::One),
            "2" => Some(FaceCode::Two),
            "3" => Some(FaceCode::Three),
            "4" => Some(FaceCode::Four),
            _ => None,
        }
    }
}

/// One annotated shape on one frame, with its label attributes already
/// resolved to face codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    pub points: Vec<f64>,
    /// Face codes set on the shape, in attribute order. Only the first one counts.
    pub attribute: Vec<String>,
    pub color: String,
}

impl Shape {
    pub fn face_code(&self) -> Option<FaceCode> {
        self.attribute.first().and_then(|c| FaceCode::parse(c))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSpec {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSpec {
    pub id: u64,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub attributes: Vec<AttributeSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    pub spec_id: u64,
    pub value: String,
}

/// A shape as the annotation server returns it, before label resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawShape {
    pub frame: u64,
    pub label_id: u64,
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    pub points: Vec<f64>,
    #[serde(default)]
    pub attributes: Vec<AttributeValue>,
}

/// Everything fetched for one job: its frame segment, the project labels
/// and the job's shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDump {
    #[serde(default)]
    pub job_id: Option<u64>,
    #[serde(default)]
    pub task_id: Option<u64>,
    pub start_frame: u64,
    pub stop_frame: u64,
    pub labels: Vec<LabelSpec>,
    pub shapes: Vec<RawShape>,
}

impl JobDump {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn contains_frame(&self, frame: u64) -> bool {
        (self.start_frame..=self.stop_frame).contains(&frame)
    }
}
