use crate::error::{Error, Result};
use crate::model::{FaceCode, JobDump, Shape};
use std::collections::{BTreeMap, HashMap};

/// Resolved shapes grouped by frame. Shapes keep the order in which the
/// job listed them, which is also their draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameIndex {
    frames: BTreeMap<u64, Vec<Shape>>,
}

impl FrameIndex {
    /// Resolves every shape of `job` against its labels in one pass.
    ///
    /// Only label attributes named `1`..`4` are face codes, and a code is
    /// set on a shape only when its value is exactly `"true"`.
    pub fn from_job(job: &JobDump) -> Result<Self> {
        let colors: HashMap<u64, &str> = job
            .labels
            .iter()
            .map(|l| (l.id, l.color.as_str()))
            .collect();

        let codes: HashMap<u64, &str> = job
            .labels
            .iter()
            .flat_map(|l| l.attributes.iter())
            .filter(|a| FaceCode::parse(&a.name).is_some())
            .map(|a| (a.id, a.name.as_str()))
            .collect();

        let mut frames: BTreeMap<u64, Vec<Shape>> = BTreeMap::new();
        for raw in &job.shapes {
            let color = colors.get(&raw.label_id).ok_or(Error::UnknownLabel {
                frame: raw.frame,
                label_id: raw.label_id,
            })?;
            let attribute = raw
                .attributes
                .iter()
                .filter(|a| a.value == "true")
                .filter_map(|a| codes.get(&a.spec_id).map(|c| c.to_string()))
                .collect();

            frames.entry(raw.frame).or_default().push(Shape {
                shape_type: raw.shape_type,
                points: raw.points.clone(),
                attribute,
                color: color.to_string(),
            });
        }

        log::debug!(
            "indexed {} shapes over {} frames",
            job.shapes.len(),
            frames.len()
        );
        Ok(Self { frames })
    }

    pub fn shapes(&self, frame: u64) -> &[Shape] {
        self.frames.get(&frame).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Frames that carry at least one shape, ascending, with their shape counts.
    pub fn frame_counts(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.frames.iter().map(|(f, s)| (*f, s.len()))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
