pub(crate) struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    pub(crate) fn new(vars: Vec<(&'static str, Option<&str>)>) -> Self {
        let mut saved = Vec::new();
        for (key, value) in vars {
            saved.push((key, std::env::var(key).ok()));
            match value {
                Some(val) => std::env::set_var(key, val),
                None => std::env::remove_var(key),
            }
        }
        Self { saved }
    }

    /// Clear every variable the configuration layer reads.
    pub(crate) fn clean() -> Self {
        Self::new(vec![
            ("TRY_INTERACTIVE", None),
            ("TRY_DEBUG", None),
            ("TRY_COLOR", None),
            ("SHELL", None),
        ])
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.iter().rev() {
            match value {
                Some(val) => std::env::set_var(key, val),
                None => std::env::remove_var(key),
            }
        }
    }
}
