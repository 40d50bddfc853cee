// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Coarse progress reporting for long-running searches.
//!
//! Progress is a cosmetic side channel: it never feeds back into control
//! flow, and sinks must tolerate ticks arriving from any worker thread in
//! any order.

use std::io::Write;
use std::sync::Mutex;

/// Receives one tick per finished unit of work.
///
/// `done` is the number of units that finished before this one, so the
/// first tick reports 0.
pub trait Progress: Sync {
    fn tick(&self, done: u64);
}

/// Discards all ticks. The default for callers that do not care.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn tick(&self, _done: u64) {}
}

/// Streams a dot per `dot_every` units and the running count per
/// `count_every` units, flushing after each mark.
pub struct DotProgress<W> {
    sink: Mutex<W>,
    count_every: u64,
    dot_every: u64,
}

impl<W: Write> DotProgress<W> {
    /// Dot every 10 units, count every 100.
    pub fn new(sink: W) -> Self {
        Self::with_intervals(sink, 100, 10)
    }

    pub fn with_intervals(sink: W, count_every: u64, dot_every: u64) -> Self {
        Self {
            sink: Mutex::new(sink),
            count_every,
            dot_every,
        }
    }

    /// Recover the sink, e.g. to inspect what was written.
    pub fn into_inner(self) -> W {
        match self.sink.into_inner() {
            Ok(sink) => sink,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Progress for DotProgress<W> {
    fn tick(&self, done: u64) {
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };
        // Write errors are swallowed: a broken progress pipe must not
        // abort the search.
        if done % self.count_every == 0 {
            let _ = write!(sink, "{done}");
        } else if done % self.dot_every == 0 {
            let _ = write!(sink, ".");
        } else {
            return;
        }
        let _ = sink.flush();
    }
}
