/// The three network-backed stages. Each owns one busy flag and one
/// re-entrancy rule; the lanes are independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Upload,
    Search,
    Generate,
}

/// Per-stage in-flight flags. A flag is true for the full duration of that
/// stage's call and must be cleared on every exit path.
#[derive(Debug, Default, Clone, Copy)]
pub struct BusyFlags {
    upload: bool,
    search: bool,
    generate: bool,
}

impl BusyFlags {
    pub fn begin(&mut self, stage: Stage) {
        *self.slot(stage) = true;
    }

    pub fn end(&mut self, stage: Stage) {
        *self.slot(stage) = false;
    }

    pub fn is_busy(&self, stage: Stage) -> bool {
        match stage {
            Stage::Upload => self.upload,
            Stage::Search => self.search,
            Stage::Generate => self.generate,
        }
    }

    fn slot(&mut self, stage: Stage) -> &mut bool {
        match stage {
            Stage::Upload => &mut self.upload,
            Stage::Search => &mut self.search,
            Stage::Generate => &mut self.generate,
        }
    }
}
