//! Bounded recency window used to smooth frame-to-frame measurement noise.

use crate::frame::FrameMeasurement;

/// The three fields of a measurement that participate in smoothing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSample {
    pub shoulder_span: f64,
    pub shoulder_height_delta: f64,
    pub head_shoulder_distance: f64,
}

impl From<&FrameMeasurement> for FrameSample {
    fn from(frame: &FrameMeasurement) -> Self {
        Self {
            shoulder_span: frame.shoulder_span,
            shoulder_height_delta: frame.shoulder_height_delta,
            head_shoulder_distance: frame.head_shoulder_distance,
        }
    }
}

/// Arithmetic means over the current window contents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingAverages {
    pub shoulder_span: f64,
    pub shoulder_height_delta: f64,
    pub head_shoulder_distance: f64,
}

/// Fixed-capacity ring buffer of the most recent post-calibration samples.
///
/// Oldest entry is evicted on overflow (strict FIFO). The ring is indexed by
/// write position so push and evict are O(1); averages are recomputed over
/// the live contents on demand.
pub struct RollingWindow {
    buffer: Vec<FrameSample>,
    capacity: usize,
    write_pos: usize,
}

impl RollingWindow {
    /// Create an empty window holding at most `capacity` samples
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
            write_pos: 0,
        }
    }

    /// Push a sample, evicting the oldest if the window is full
    pub fn push(&mut self, sample: FrameSample) {
        if self.buffer.len() < self.capacity {
            self.buffer.push(sample);
        } else {
            self.buffer[self.write_pos] = sample;
        }
        self.write_pos = (self.write_pos + 1) % self.capacity;
    }

    /// Number of samples currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when the window holds no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Mean of each field over the current contents, or `None` when empty
    #[must_use]
    pub fn averages(&self) -> Option<RollingAverages> {
        if self.buffer.is_empty() {
            return None;
        }

        let n = self.buffer.len() as f64;
        Some(RollingAverages {
            shoulder_span: self.buffer.iter().map(|s| s.shoulder_span).sum::<f64>() / n,
            shoulder_height_delta: self
                .buffer
                .iter()
                .map(|s| s.shoulder_height_delta)
                .sum::<f64>()
                / n,
            head_shoulder_distance: self
                .buffer
                .iter()
                .map(|s| s.head_shoulder_distance)
                .sum::<f64>()
                / n,
        })
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.write_pos = 0;
    }
}
