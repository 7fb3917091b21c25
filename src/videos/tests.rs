// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#[cfg(test)]
mod videos_test {
    use crate::common::{Error, RepoConfig};
    use crate::log::StringLogger;
    use crate::videos::videofront::{normalize_base_url, VideofrontConfig};
    use crate::videos::{
        routes, CloudVideos, DisplayItem, KeywordStore, MemoryKeywordStore, ReturnType,
        SearchProxy, SearchQuery, SearchStateKey, SessionId, SessionQuery, VideoKind, VideoRecord,
        VideofrontVideos, normalize_page, page_offset, PAGE_SIZE,
    };
    use async_trait::async_trait;
    use axum::extract::{Query, State};
    use axum::response::IntoResponse;
    use axum::Json;
    use hyper::{StatusCode, Uri};
    use std::sync::{Arc, Mutex};

    const BASE_URL: &str = "https://videos.example.com/";

    /// Serves canned records and remembers each request.
    #[derive(Default)]
    struct FakeVideos {
        records: Vec<VideoRecord>,
        fail: bool,
        requests: Mutex<Vec<(usize, usize, String)>>,
    }

    impl FakeVideos {
        fn with_records(records: Vec<VideoRecord>) -> Self {
            Self {
                records,
                ..Default::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn requests(&self) -> Vec<(usize, usize, String)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CloudVideos for FakeVideos {
        fn base_url(&self) -> &str {
            BASE_URL
        }

        async fn list_videos(
            &self,
            offset: usize,
            count: usize,
            pattern: &str,
            _logger: &StringLogger,
        ) -> Result<Vec<VideoRecord>, Error> {
            self.requests
                .lock()
                .unwrap()
                .push((offset, count, pattern.to_string()));
            if self.fail {
                Err(Error::provider_unavailable("connection refused".to_string()))
            } else {
                Ok(self.records.clone())
            }
        }
    }

    fn videos(n: usize) -> Vec<VideoRecord> {
        (0..n)
            .map(|i| VideoRecord::new(format!("id{i}").as_str()).title(&format!("Lecture {i}")))
            .collect()
    }

    fn search_proxy(videos: &Arc<FakeVideos>) -> SearchProxy {
        SearchProxy::new(
            Arc::clone(videos) as Arc<dyn CloudVideos>,
            Arc::new(MemoryKeywordStore::new()),
            7,
        )
    }

    #[tokio::test]
    async fn offset_and_pattern_tests() {
        let fake = Arc::new(FakeVideos::with_records(videos(3)));
        let proxy = search_proxy(&fake);
        let session = SessionId::from("s1");

        let result = proxy.search(&session, "lecture", 2).await.expect("search");
        assert_eq!(result.page, 2);
        assert_eq!(
            fake.requests(),
            vec![(21, PAGE_SIZE, "lecture%".to_string())]
        );
        assert!(!result.requires_login);
        assert!(result.no_refresh && result.no_search);
    }

    #[tokio::test]
    async fn page_normalization_tests() {
        let fake = Arc::new(FakeVideos::with_records(videos(1)));
        let proxy = search_proxy(&fake);
        let session = SessionId::from("s1");

        for page in [-5, 0, 1] {
            let result = proxy.search(&session, "a", page).await.expect("search");
            assert_eq!(result.page, 1);
        }
        assert!(fake
            .requests()
            .iter()
            .all(|(offset, _, pattern)| *offset == 1 && pattern == "a%"));
    }

    #[tokio::test]
    async fn remembered_keyword_tests() {
        let fake = Arc::new(FakeVideos::with_records(videos(1)));
        let proxy = search_proxy(&fake);
        let alice = SessionId::from("alice");
        let bob = SessionId::from("bob");

        proxy.search(&alice, "lecture", 1).await.expect("page 1");
        proxy.search(&alice, "", 2).await.expect("page 2");
        // Another session has nothing to continue.
        proxy.search(&bob, "", 2).await.expect("bob");
        // A new keyword overwrites the remembered one.
        proxy.search(&alice, "lab", 1).await.expect("new keyword");
        proxy.search(&alice, "", 3).await.expect("page 3");
        // Page 0 does not continue the previous search.
        proxy.search(&alice, "", 0).await.expect("page 0");

        let patterns: Vec<_> = fake
            .requests()
            .into_iter()
            .map(|(offset, _, pattern)| (offset, pattern))
            .collect();
        assert_eq!(
            patterns,
            vec![
                (1, "lecture%".to_string()),
                (21, "lecture%".to_string()),
                (21, "%".to_string()),
                (1, "lab%".to_string()),
                (41, "lab%".to_string()),
                (1, "%".to_string()),
            ]
        );
    }

    #[test]
    fn keyword_store_tests() {
        let store = MemoryKeywordStore::new();
        let session = SessionId::from("s1");
        let key = SearchStateKey::new(&session, 1);
        assert_eq!(store.remembered(&key), None);
        store.remember(key.clone(), "lecture".to_string());
        assert_eq!(store.remembered(&key).as_deref(), Some("lecture"));
        // Each repository instance remembers its own keyword.
        assert_eq!(store.remembered(&SearchStateKey::new(&session, 2)), None);
        store.forget(&key);
        assert_eq!(store.remembered(&key), None);
    }

    #[tokio::test]
    async fn has_more_tests() {
        let session = SessionId::from("s1");

        let fake = Arc::new(FakeVideos::with_records(videos(PAGE_SIZE - 1)));
        let result = search_proxy(&fake).search(&session, "x", 4).await.expect("search");
        assert!(!result.has_more);
        assert_eq!(result.pages, 4);

        let fake = Arc::new(FakeVideos::with_records(videos(PAGE_SIZE)));
        let result = search_proxy(&fake).search(&session, "x", 4).await.expect("search");
        assert!(result.has_more);
        assert_eq!(result.pages, -1);

        let fake = Arc::new(FakeVideos::with_records(Vec::new()));
        let result = search_proxy(&fake).search(&session, "x", 1).await.expect("search");
        assert!(result.items.is_empty());
        assert!(!result.has_more);
    }

    #[tokio::test]
    async fn filter_and_order_tests() {
        let mut records = videos(PAGE_SIZE);
        records[3] = VideoRecord::new("img")
            .title("Poster")
            .kind(VideoKind::from("image"));
        let fake = Arc::new(FakeVideos::with_records(records));
        let result = search_proxy(&fake)
            .search(&SessionId::from("s1"), "", 1)
            .await
            .expect("search");

        // The provider returned a full page but only 19 are videos.
        assert_eq!(result.items.len(), PAGE_SIZE - 1);
        assert!(!result.has_more);
        assert!(result.items.iter().all(|item| item.source != "videofront://img"));
        assert_eq!(result.items[3].source, "videofront://id4");
        assert!(result
            .items
            .iter()
            .all(|item| item.title == format!("{}.mp4", item.short_title)));
    }

    #[tokio::test]
    async fn video_and_image_tests() {
        let fake = Arc::new(FakeVideos::with_records(vec![
            VideoRecord::new("v1").title("Intro"),
            VideoRecord::new("i1")
                .title("Slide")
                .kind(VideoKind::Other("image".to_string())),
        ]));
        let result = search_proxy(&fake)
            .search(&SessionId::from("s1"), "", 1)
            .await
            .expect("search");
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].title, "Intro.mp4");
    }

    #[tokio::test]
    async fn provider_failure_tests() {
        let fake = Arc::new(FakeVideos::failing());
        let proxy = search_proxy(&fake);
        let logger = StringLogger::default();
        match proxy
            .search_with_logger(&SessionId::from("s1"), "lecture", 1, &logger)
            .await
        {
            Ok(result) => panic!("expected failure, got {result:?}"),
            Err(e) => assert!(e.is_provider_failure()),
        }
        assert!(logger.contains_warnings());
        // No retry.
        assert_eq!(fake.requests().len(), 1);
    }

    #[test]
    fn display_item_tests() {
        let record = VideoRecord::new("abc123").filename("raw.mp4");
        let item = DisplayItem::from_record(&record, BASE_URL);
        assert_eq!(item.short_title, "raw.mp4");
        assert_eq!(item.title, "raw.mp4.mp4");
        assert_eq!(item.thumbnail_title, "");
        assert_eq!(item.source, "videofront://abc123");
        assert_eq!(
            item.thumbnail,
            "https://videos.example.com/thumb/get/abc123/?w=128"
        );
        assert_eq!(item.icon, "https://videos.example.com/thumb/get/abc123/?w=29");
        assert_eq!((item.thumbnail_width, item.thumbnail_height), (120, 120));
        assert!(item.size.is_empty() && item.date.is_empty());

        let titled = VideoRecord::new("abc123")
            .title("Week 1")
            .filename("raw.mp4");
        let item = DisplayItem::from_record(&titled, BASE_URL);
        assert_eq!(item.short_title, "Week 1");
        assert_eq!(item.title, "Week 1.mp4");
        assert_eq!(item.thumbnail_title, "Week 1");
    }

    #[test]
    fn parse_listing_tests() {
        let logger = StringLogger::default();
        let text = r#"{"videos": [
            {"VIDEO_IDENTIFIER": "abc123", "VIDEO_TIPO": "video", "VIDEO_TITULO": "", "VIDEO_FILENAME": "raw.mp4"},
            {"VIDEO_IDENTIFIER": "img1", "VIDEO_TIPO": "image", "VIDEO_TITULO": "Poster"},
            {"VIDEO_TIPO": "video", "VIDEO_TITULO": "No id"}
        ]}"#;
        let records = VideofrontVideos::parse_listing(text, &logger).expect("listing");
        assert_eq!(
            records,
            vec![
                VideoRecord::new("abc123").filename("raw.mp4"),
                VideoRecord::new("img1")
                    .title("Poster")
                    .kind(VideoKind::Other("image".to_string())),
            ]
        );
        assert!(logger.contains_warnings());

        let empty = VideofrontVideos::parse_listing("{}", &logger).expect("empty");
        assert!(empty.is_empty());

        match VideofrontVideos::parse_listing("<html>", &logger) {
            Ok(records) => panic!("expected failure, got {records:?}"),
            Err(e) => assert!(e.is_provider_failure()),
        }
    }

    #[test]
    fn videofront_config_tests() {
        let config = RepoConfig::builder()
            .toml_str(
                r#"
            [videofront]
            url = "https://videos.example.com"
            token = "TBD"
            repository_id = 3
            "#,
            )
            .build()
            .expect("config");
        let section = VideofrontConfig::load(&config).expect("section");
        assert_eq!(section.repository_id, 3);
        assert_eq!(section.token.as_deref(), Some("TBD"));

        let videos = VideofrontVideos::new(&config).expect("videos");
        assert_eq!(videos.base_url(), BASE_URL);
        assert_eq!(
            videos.listing_url(21, PAGE_SIZE, "week 1%"),
            "https://videos.example.com/api/videos?start=21&limit=20&pattern=week%201%25"
        );
        assert!(SearchProxy::from_config(&config).is_ok());

        assert_eq!(normalize_base_url(BASE_URL), BASE_URL);

        let missing = RepoConfig::builder()
            .toml_str("[videofront]\nurl = \"\"\n")
            .build()
            .expect("config");
        assert!(VideofrontVideos::new(&missing).is_err());
    }

    #[test]
    fn capabilities_tests() {
        let fake = Arc::new(FakeVideos::default());
        let proxy = search_proxy(&fake);
        assert!(!proxy.global_search());
        assert!(!proxy.check_login());

        let capabilities = proxy.capabilities();
        assert_eq!(capabilities.supported_filetypes, vec!["video".to_string()]);
        assert_eq!(capabilities.supported_returntypes, ReturnType::ExternalLink);
        assert!(!capabilities.contains_private_data);
        assert!(proxy.get_listing("", "").list.is_empty());

        let form = proxy.print_login();
        assert_eq!(form.login.len(), 1);
        assert_eq!(form.login[0].field_type, "text");
        assert_eq!(form.login[0].name, "s");
        assert_eq!(form.login_btn_action, "search");
        assert!(form.allowcaching);

        let json = serde_json::to_value(&form).expect("json");
        assert_eq!(json["login"][0]["type"], "text");
    }

    #[tokio::test]
    async fn route_tests() {
        let fake = Arc::new(FakeVideos::with_records(videos(2)));
        let proxy = Arc::new(search_proxy(&fake));

        let query = SearchQuery {
            s: "lecture".to_string(),
            page: 0,
            session: SessionId::from("s1"),
        };
        let result = routes::search(State(Arc::clone(&proxy)), Query(query))
            .await
            .expect("search")
            .0;
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.page, 1);

        let Json(capabilities) = routes::capabilities(State(Arc::clone(&proxy))).await;
        assert!(!capabilities.global_search);
        let _router = crate::videos::router(Arc::clone(&proxy));

        let failing = Arc::new(FakeVideos::failing());
        let failing_proxy = Arc::new(search_proxy(&failing));
        let query = SearchQuery {
            session: SessionId::from("s1"),
            ..Default::default()
        };
        match routes::search(State(failing_proxy), Query(query)).await {
            Ok(_) => panic!("expected failure"),
            Err(e) => assert_eq!(e.into_response().status(), StatusCode::FAILED_DEPENDENCY),
        }
    }

    #[tokio::test]
    async fn route_session_tests() {
        let uri: Uri = "/search?s=lecture&page=2".parse().expect("uri");
        assert!(Query::<SearchQuery>::try_from_uri(&uri).is_err());
        let uri: Uri = "/search?s=lecture&page=2&session=alice".parse().expect("uri");
        let Query(query) = Query::<SearchQuery>::try_from_uri(&uri).expect("query");
        assert_eq!(query.session, SessionId::from("alice"));

        let fake = Arc::new(FakeVideos::with_records(videos(1)));
        let proxy = Arc::new(search_proxy(&fake));
        let query = SearchQuery {
            s: "lecture".to_string(),
            page: 1,
            session: SessionId::from(" "),
        };
        match routes::search(State(Arc::clone(&proxy)), Query(query)).await {
            Ok(_) => panic!("expected rejection"),
            Err(e) => assert_eq!(e.into_response().status(), StatusCode::BAD_REQUEST),
        }
        assert!(fake.requests().is_empty());

        let alice = SessionId::from("alice");
        proxy.search(&alice, "lecture", 1).await.expect("page 1");
        let status = routes::end_session(
            State(Arc::clone(&proxy)),
            Query(SessionQuery {
                session: alice.clone(),
            }),
        )
        .await
        .expect("end session");
        assert_eq!(status, StatusCode::NO_CONTENT);
        proxy.search(&alice, "", 2).await.expect("page 2");
        assert_eq!(fake.requests()[1], (21, PAGE_SIZE, "%".to_string()));
    }

    #[tokio::test]
    async fn forget_session_tests() {
        let fake = Arc::new(FakeVideos::with_records(videos(1)));
        let proxy = search_proxy(&fake);
        let alice = SessionId::from("alice");
        let bob = SessionId::from("bob");

        proxy.search(&alice, "lecture", 1).await.expect("alice");
        proxy.search(&bob, "lab", 1).await.expect("bob");
        proxy.forget_session(&alice);
        proxy.search(&alice, "", 2).await.expect("alice page 2");
        proxy.search(&bob, "", 2).await.expect("bob page 2");

        let patterns: Vec<_> = fake.requests().into_iter().map(|(_, _, p)| p).collect();
        assert_eq!(patterns[2], "%");
        assert_eq!(patterns[3], "lab%");
    }

    #[tokio::test]
    async fn huge_page_tests() {
        let fake = Arc::new(FakeVideos::with_records(videos(1)));
        let proxy = search_proxy(&fake);
        let result = proxy
            .search(&SessionId::from("s1"), "a", i64::MAX)
            .await
            .expect("search");
        assert_eq!(result.page, normalize_page(i64::MAX));
        assert!(!result.has_more);
        assert_eq!(fake.requests()[0].0, usize::MAX);

        assert_eq!(page_offset(usize::MAX), usize::MAX);
        assert_eq!(page_offset(1), 1);
        assert_eq!(page_offset(3), 41);
        assert!(normalize_page(i64::MAX) > 1);
        assert_eq!(normalize_page(i64::MIN), 1);
    }
}
