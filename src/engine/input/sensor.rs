// Rotary sensor access and background polling
//
// The motor driver is a black box that yields an absolute angle in degrees.
// A poller thread reads it on its own period and publishes the latest value;
// the main loop only ever looks at the most recent reading.

use crate::core::error::InputError;
use log::{debug, trace, warn};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Source of absolute angular positions
pub trait AngleSensor: Send {
    /// Read the current absolute position in degrees
    fn read_position(&mut self) -> Result<i32, InputError>;
}

/// Sensor exposed by the motor driver as a text file holding the angle
///
/// Suits drivers that publish their state through sysfs-style files.
#[derive(Debug, Clone)]
pub struct FileSensor {
    path: PathBuf,
}

impl FileSensor {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(text: &str) -> Result<i32, InputError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(InputError::Unavailable);
        }
        trimmed
            .parse::<i32>()
            .map_err(|e| InputError::Parse(format!("'{}': {}", trimmed, e)))
    }
}

impl AngleSensor for FileSensor {
    fn read_position(&mut self) -> Result<i32, InputError> {
        let text = std::fs::read_to_string(&self.path)?;
        Self::parse(&text)
    }
}

/// A published sensor value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// Absolute position in degrees
    pub degrees: i32,
    /// Increments on every publish, so readers can spot fresh values
    pub sequence: u64,
}

/// Last-value-wins slot shared between the poller and the main loop
#[derive(Debug, Clone, Default)]
pub struct SharedReading {
    inner: Arc<Mutex<Option<Reading>>>,
}

impl SharedReading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a new reading, replacing the previous one
    pub fn store(&self, degrees: i32) {
        let mut slot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let sequence = (*slot).map_or(0, |r| r.sequence + 1);
        *slot = Some(Reading { degrees, sequence });
    }

    /// The latest reading, or `Unavailable` if nothing was published yet
    pub fn latest(&self) -> Result<Reading, InputError> {
        let slot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        (*slot).ok_or(InputError::Unavailable)
    }
}

/// Background thread that polls a sensor at a fixed period
pub struct SensorPoller {
    reading: SharedReading,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SensorPoller {
    /// Start polling `sensor` every `period`
    pub fn spawn<S: AngleSensor + 'static>(mut sensor: S, period: Duration) -> std::io::Result<Self> {
        let reading = SharedReading::new();
        let stop = Arc::new(AtomicBool::new(false));

        let thread_reading = reading.clone();
        let thread_stop = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("sensor-poller".to_string())
            .spawn(move || {
                debug!("Sensor poller started ({:?} period)", period);
                let mut failing = false;
                while !thread_stop.load(Ordering::Relaxed) {
                    match sensor.read_position() {
                        Ok(degrees) => {
                            trace!("Sensor reading: {}°", degrees);
                            thread_reading.store(degrees);
                            failing = false;
                        }
                        Err(e) => {
                            if !failing {
                                warn!("Sensor read failed: {}", e);
                            }
                            failing = true;
                        }
                    }
                    thread::sleep(period);
                }
                debug!("Sensor poller stopped");
            })?;

        Ok(Self {
            reading,
            stop,
            handle: Some(handle),
        })
    }

    /// Handle to the published readings
    pub fn reading(&self) -> SharedReading {
        self.reading.clone()
    }

    /// Stop the thread and wait for it to exit
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Sensor poller thread panicked");
            }
        }
    }
}

impl Drop for SensorPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Instant;

    /// Sensor that replays a fixed list of readings, then repeats the last
    struct ScriptedSensor {
        values: Vec<i32>,
        index: usize,
    }

    impl AngleSensor for ScriptedSensor {
        fn read_position(&mut self) -> Result<i32, InputError> {
            let value = self
                .values
                .get(self.index)
                .or(self.values.last())
                .copied()
                .ok_or(InputError::Unavailable)?;
            self.index += 1;
            Ok(value)
        }
    }

    #[test]
    fn test_shared_reading_starts_unavailable() {
        let reading = SharedReading::new();
        assert!(matches!(reading.latest(), Err(InputError::Unavailable)));
    }

    #[test]
    fn test_shared_reading_last_value_wins() {
        let reading = SharedReading::new();
        reading.store(10);
        reading.store(20);

        let latest = reading.latest().unwrap();
        assert_eq!(latest.degrees, 20);
        assert_eq!(latest.sequence, 1);
    }

    #[test]
    fn test_shared_reading_clones_share_slot() {
        let reading = SharedReading::new();
        let other = reading.clone();
        reading.store(-45);
        assert_eq!(other.latest().unwrap().degrees, -45);
    }

    #[test]
    fn test_file_sensor_parse() {
        assert_eq!(FileSensor::parse(" -37\n").unwrap(), -37);
        assert!(matches!(FileSensor::parse(""), Err(InputError::Unavailable)));
        assert!(matches!(FileSensor::parse("abc"), Err(InputError::Parse(_))));
    }

    #[test]
    fn test_file_sensor_reads_file() {
        let path = std::env::temp_dir().join("corgi_demo_sensor_test.txt");
        {
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(b"123\n").unwrap();
        }

        let mut sensor = FileSensor::new(&path);
        assert_eq!(sensor.read_position().unwrap(), 123);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_file_sensor_missing_file() {
        let mut sensor = FileSensor::new("/nonexistent/motor/position");
        assert!(matches!(sensor.read_position(), Err(InputError::Io(_))));
    }

    #[test]
    fn test_poller_publishes_readings() {
        let sensor = ScriptedSensor {
            values: vec![5, 10, 15],
            index: 0,
        };
        let mut poller = SensorPoller::spawn(sensor, Duration::from_millis(1)).unwrap();
        let reading = poller.reading();

        let deadline = Instant::now() + Duration::from_secs(2);
        while reading.latest().ok().map(|r| r.degrees) != Some(15) && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }

        assert_eq!(reading.latest().unwrap().degrees, 15);
        poller.stop();
        assert!(poller.handle.is_none());
    }
}
