/// Hands out dense slot indices and recycles released ones, newest first.
#[derive(Debug, Default)]
pub struct IdPool {
    current: u32,
    available: Vec<u32>,
}

impl IdPool {
    pub fn get_next(&mut self) -> u32 {
        if let Some(index) = self.available.pop() {
            index
        } else {
            let ret = self.current;
            self.current += 1;
            ret
        }
    }

    pub fn free(&mut self, index: u32) {
        debug_assert!(
            index < self.current,
            "Slot {index} can't be freed, as it was never created by the pool"
        );
        self.available.push(index);
    }

    /// Number of indices currently handed out.
    pub fn in_use(&self) -> usize {
        self.current as usize - self.available.len()
    }
}
