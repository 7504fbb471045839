//! In-memory cache and notifier doubles for the verification workflow

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

use super::traits::{CodeCacheTrait, NotifierTrait};

/// Mock cache service; TTLs are recorded but never enforced
#[derive(Default)]
pub struct MockCodeCache {
    entries: Mutex<HashMap<String, (String, Duration)>>,
    fail_put: AtomicBool,
    fail_get: AtomicBool,
    fail_delete: AtomicBool,
}

impl MockCodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation fail
    pub fn set_should_fail(&self, fail: bool) {
        self.fail_put.store(fail, Ordering::SeqCst);
        self.fail_get.store(fail, Ordering::SeqCst);
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_put(&self, fail: bool) {
        self.fail_put.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_get(&self, fail: bool) {
        self.fail_get.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    /// Stored value for `key`, bypassing the failure switches
    pub async fn stored(&self, key: &str) -> Option<String> {
        self.entries.lock().await.get(key).map(|(v, _)| v.clone())
    }

    /// TTL recorded for `key`
    pub async fn ttl(&self, key: &str) -> Option<Duration> {
        self.entries.lock().await.get(key).map(|(_, ttl)| *ttl)
    }

    /// Simulate TTL expiry of `key`
    pub async fn expire(&self, key: &str) {
        self.entries.lock().await.remove(key);
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl CodeCacheTrait for MockCodeCache {
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), String> {
        if self.fail_put.load(Ordering::SeqCst) {
            return Err("Cache service error".to_string());
        }
        self.entries
            .lock()
            .await
            .insert(key.to_string(), (value.to_string(), ttl));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err("Cache service error".to_string());
        }
        Ok(self.stored(key).await)
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err("Cache service error".to_string());
        }
        Ok(self.entries.lock().await.remove(key).is_some())
    }
}

/// Counting notifier that records every code it is asked to send
#[derive(Default)]
pub struct MockNotifier {
    calls: AtomicUsize,
    sent: Mutex<Vec<(String, String)>>,
    should_fail: AtomicBool,
    delay: Mutex<Option<Duration>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose sends always fail
    pub fn failing() -> Self {
        let notifier = Self::default();
        notifier.set_should_fail(true);
        notifier
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// Sleep this long before completing each send
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.lock().await = Some(delay);
    }

    /// Number of send attempts, including failed ones
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Last code successfully sent to `email`
    pub async fn last_code_for(&self, email: &str) -> Option<String> {
        self.sent
            .lock()
            .await
            .iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl NotifierTrait for MockNotifier {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.should_fail.load(Ordering::SeqCst) {
            return Err("SMTP relay rejected the message".to_string());
        }

        self.sent
            .lock()
            .await
            .push((email.to_string(), code.to_string()));
        Ok(())
    }
}
