// Sat Oct 17 2026 - Alex

use crate::config::Config;
use crate::error::{ResolverError, ResolverResult};
use crate::output::{JsonWriter, Resolution};
use crate::request::{self, LookupRequest, Operation};
use crate::sdk::{CacheStats, ClassDescriptionDocument, DocumentCache, DocumentSource, SdkDirectory};
use crate::utils::logging::ScopedTimer;
use std::path::Path;

/// Resolves offset/size lookups against SDK documents, loading each
/// document at most once until the cache is cleared.
pub struct OffsetResolver<S: DocumentSource = SdkDirectory> {
    source: S,
    cache: DocumentCache,
    writer: JsonWriter,
}

impl OffsetResolver<SdkDirectory> {
    pub fn new<P: AsRef<Path>>(sdk_dir: P) -> Self {
        Self::with_source(SdkDirectory::new(sdk_dir.as_ref()))
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.sdk_dir).with_writer(JsonWriter::new().with_indent_size(config.indent_size))
    }
}

impl<S: DocumentSource> OffsetResolver<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            cache: DocumentCache::new(),
            writer: JsonWriter::new(),
        }
    }

    pub fn with_writer(mut self, writer: JsonWriter) -> Self {
        self.writer = writer;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn load_document(&mut self, source_id: &str) -> ResolverResult<&ClassDescriptionDocument> {
        if self.cache.contains(source_id) {
            self.cache.record_hit();
        } else {
            let document = self.source.load(source_id)?;
            log::debug!(
                "Loaded {} classes from {}",
                document.class_count(),
                self.source.locate(source_id).display()
            );
            self.cache.insert(source_id, document);
        }

        self.cache.get(source_id).ok_or_else(|| ResolverError::NotFound {
            path: self.source.locate(source_id),
        })
    }

    pub fn get_offset(&mut self, class_name: &str, key: &str, source_id: &str) -> ResolverResult<Option<u64>> {
        Ok(self.load_document(source_id)?.offset_of(class_name, key))
    }

    pub fn get_size(&mut self, class_name: &str, source_id: &str) -> ResolverResult<Option<u64>> {
        Ok(self.load_document(source_id)?.size_of(class_name))
    }

    pub fn read_requests<P: AsRef<Path>>(&self, input_path: P) -> ResolverResult<Vec<LookupRequest>> {
        request::read_requests(input_path)
    }

    pub fn resolve(&mut self, requests: &[LookupRequest]) -> ResolverResult<Resolution> {
        self.resolve_with_progress(requests, |_, _| {})
    }

    /// Resolves in request order. `on_progress` runs after each request with
    /// its index. Stops at the first fatal error.
    pub fn resolve_with_progress<F>(&mut self, requests: &[LookupRequest], mut on_progress: F) -> ResolverResult<Resolution>
    where
        F: FnMut(usize, &LookupRequest),
    {
        let _timer = ScopedTimer::new("resolve");
        let mut resolution = Resolution::new();

        for (index, request) in requests.iter().enumerate() {
            let operation = request.operation()?;
            let value = match operation {
                Operation::Offset => match request.key.as_deref() {
                    Some(key) => self.get_offset(&request.class, key, &request.file)?,
                    None => {
                        self.load_document(&request.file)?;
                        log::warn!("Offset request for {} has no key", request.class);
                        None
                    }
                },
                Operation::Size => self.get_size(&request.class, &request.file)?,
            };

            match value {
                Some(value) => resolution.table.insert(request.result_key(operation), value),
                None => {
                    log::debug!("Unresolved: {}", request);
                    resolution.unresolved.push(request.clone());
                }
            }

            on_progress(index, request);
        }

        Ok(resolution)
    }

    pub fn resolve_and_write<P: AsRef<Path>>(&mut self, requests: &[LookupRequest], output_path: P) -> ResolverResult<Resolution> {
        let resolution = self.resolve(requests)?;
        self.writer.write_to_file(&resolution.table, output_path)?;
        Ok(resolution)
    }

    pub fn write<P: AsRef<Path>>(&self, resolution: &Resolution, output_path: P) -> ResolverResult<()> {
        self.writer.write_to_file(&resolution.table, output_path)
    }

    pub fn clear_cache(&mut self) {
        log::debug!("Dropping {} cached documents", self.cache.len());
        self.cache.clear();
    }

    pub fn cached_documents(&self) -> usize {
        self.cache.len()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;

    const PLAYER_SDK: &str = r#"{"Player": {"Attributes": [{"Name":"Health","Offset":"0x10"},{"Name":"Mana","Offset":"0x20","Size":"0x4"}]}}"#;

    /// In-memory documents with a load counter.
    struct CountingSource {
        documents: RefCell<HashMap<String, String>>,
        loads: Cell<usize>,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                documents: RefCell::new(HashMap::new()),
                loads: Cell::new(0),
            }
        }

        fn with(self, source_id: &str, json: &str) -> Self {
            self.set(source_id, json);
            self
        }

        fn set(&self, source_id: &str, json: &str) {
            self.documents.borrow_mut().insert(source_id.to_string(), json.to_string());
        }
    }

    impl DocumentSource for CountingSource {
        fn locate(&self, source_id: &str) -> PathBuf {
            PathBuf::from("mem").join(format!("{}.json", source_id))
        }

        fn load(&self, source_id: &str) -> ResolverResult<ClassDescriptionDocument> {
            self.loads.set(self.loads.get() + 1);
            let documents = self.documents.borrow();
            let json = documents.get(source_id).ok_or_else(|| ResolverError::NotFound {
                path: self.locate(source_id),
            })?;
            serde_json::from_str(json).map_err(|e| ResolverError::parse(self.locate(source_id), e))
        }
    }

    fn player_requests() -> Vec<LookupRequest> {
        vec![
            LookupRequest::offset("Player", "Player", "Health"),
            LookupRequest::size("Player", "Player"),
        ]
    }

    #[test]
    fn test_load_is_memoized() {
        let mut resolver = OffsetResolver::with_source(CountingSource::new().with("Player", PLAYER_SDK));

        resolver.load_document("Player").unwrap();
        resolver.load_document("Player").unwrap();
        assert_eq!(resolver.get_offset("Player", "Mana", "Player").unwrap(), Some(0x20));

        assert_eq!(resolver.source().loads.get(), 1);
        assert_eq!(resolver.cache_stats().hits, 2);
    }

    #[test]
    fn test_cached_document_is_not_refreshed() {
        let mut resolver = OffsetResolver::with_source(CountingSource::new().with("Player", PLAYER_SDK));
        assert_eq!(resolver.get_offset("Player", "Health", "Player").unwrap(), Some(16));

        resolver
            .source()
            .set("Player", r#"{"Player": {"Attributes": [{"Name":"Health","Offset":"0x40"}]}}"#);
        assert_eq!(resolver.get_offset("Player", "Health", "Player").unwrap(), Some(16));

        resolver.clear_cache();
        assert_eq!(resolver.get_offset("Player", "Health", "Player").unwrap(), Some(0x40));
        assert_eq!(resolver.source().loads.get(), 2);
    }

    #[test]
    fn test_clear_cache_when_empty() {
        let mut resolver = OffsetResolver::with_source(CountingSource::new());
        resolver.clear_cache();
        assert_eq!(resolver.cached_documents(), 0);
    }

    #[test]
    fn test_missing_document_propagates() {
        let mut resolver = OffsetResolver::with_source(CountingSource::new());
        let err = resolver.get_size("Player", "Player").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_absent_class_is_not_an_error() {
        let mut resolver = OffsetResolver::with_source(CountingSource::new().with("Player", PLAYER_SDK));
        assert_eq!(resolver.get_offset("Enemy", "Health", "Player").unwrap(), None);
        assert_eq!(resolver.get_size("Enemy", "Player").unwrap(), None);
    }

    #[test]
    fn test_resolve_player_scenario() {
        let mut resolver = OffsetResolver::with_source(CountingSource::new().with("Player", PLAYER_SDK));
        let resolution = resolver.resolve(&player_requests()).unwrap();

        assert_eq!(resolution.table.iter().collect::<Vec<_>>(), vec![("Player.Health", 16), ("Player.Size", 4)]);
        assert!(resolution.unresolved.is_empty());
        assert_eq!(resolver.source().loads.get(), 1);
    }

    #[test]
    fn test_unknown_lookups_are_omitted() {
        let mut resolver = OffsetResolver::with_source(CountingSource::new().with("Player", PLAYER_SDK));
        let requests = vec![
            LookupRequest::offset("Player", "Player", "Health"),
            LookupRequest::offset("Player", "Player", "Armor"),
            LookupRequest::size("Player", "Enemy"),
        ];

        let resolution = resolver.resolve(&requests).unwrap();
        assert_eq!(resolution.resolved_count(), 1);
        assert_eq!(resolution.unresolved, requests[1..].to_vec());
    }

    #[test]
    fn test_offset_without_key_is_unresolved() {
        let mut resolver = OffsetResolver::with_source(CountingSource::new().with("Player", PLAYER_SDK));
        let mut request = LookupRequest::offset("Player", "Player", "Health");
        request.key = None;

        let resolution = resolver.resolve(&[request]).unwrap();
        assert!(resolution.table.is_empty());
        assert_eq!(resolution.unresolved_count(), 1);
    }

    #[test]
    fn test_unsupported_operation_fails() {
        let mut resolver = OffsetResolver::with_source(CountingSource::new().with("Player", PLAYER_SDK));
        let mut requests = player_requests();
        requests[1].operation = "alignment".to_string();

        let err = resolver.resolve(&requests).unwrap_err();
        assert!(matches!(err, ResolverError::UnsupportedOperation { .. }));
    }

    #[test]
    fn test_progress_callback_sees_every_request() {
        let mut resolver = OffsetResolver::with_source(CountingSource::new().with("Player", PLAYER_SDK));
        let mut seen = Vec::new();
        resolver
            .resolve_with_progress(&player_requests(), |index, _| seen.push(index))
            .unwrap();
        assert_eq!(seen, vec![0, 1]);
    }

    #[test]
    fn test_end_to_end_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let sdk_dir = dir.path().join("SDK");
        fs::create_dir(&sdk_dir).unwrap();
        fs::write(sdk_dir.join("Player.json"), PLAYER_SDK).unwrap();

        let input = dir.path().join("neededOffsets.json");
        fs::write(
            &input,
            r#"[{"file":"Player","class":"Player","key":"Health","operation":"offset"},
                {"file":"Player","class":"Player","operation":"size"}]"#,
        )
        .unwrap();
        let output = dir.path().join("offsets.json");

        let mut resolver = OffsetResolver::new(&sdk_dir);
        let requests = resolver.read_requests(&input).unwrap();
        resolver.resolve_and_write(&requests, &output).unwrap();
        resolver.clear_cache();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, "{\n    \"Player.Health\": 16,\n    \"Player.Size\": 4\n}");
    }

    #[test]
    fn test_repeat_resolution_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Player.json"), PLAYER_SDK).unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");
        let third = dir.path().join("third.json");

        let mut resolver = OffsetResolver::new(dir.path());
        resolver.resolve_and_write(&player_requests(), &first).unwrap();
        resolver.resolve_and_write(&player_requests(), &second).unwrap();
        resolver.clear_cache();
        resolver.resolve_and_write(&player_requests(), &third).unwrap();

        let first = fs::read_to_string(first).unwrap();
        assert_eq!(first, fs::read_to_string(second).unwrap());
        assert_eq!(first, fs::read_to_string(third).unwrap());
        assert_eq!(resolver.cache_stats().loads, 2);
    }

    #[test]
    fn test_from_config_uses_indent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Player.json"), PLAYER_SDK).unwrap();
        let output = dir.path().join("offsets.json");

        let config = Config::new()
            .with_sdk_dir(dir.path().to_path_buf())
            .with_indent_size(2);
        let mut resolver = OffsetResolver::from_config(&config);
        resolver.resolve_and_write(&player_requests(), &output).unwrap();

        assert!(fs::read_to_string(&output).unwrap().starts_with("{\n  \"Player.Health\""));
    }
}
