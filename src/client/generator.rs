use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use reqwest::StatusCode;

use crate::{
    app::util::rate_limiter::RateLimiter,
    avatars::{dtos::generate_avatar_dto::GenerateAvatarDto, models::generation_result::GenerationResult},
};

use super::{api::AvatarClient, enums::avatar_style::AvatarStyle, errors::ClientError, progress::Progress};

pub const GENERATE_COOLDOWN: Duration = Duration::from_secs(60);
pub const PLACEHOLDER_IMAGES: [&str; 4] = ["default1.png", "default2.png", "default3.png", "default.jpg"];
pub const DOWNLOAD_FILE_NAME: &str = "avatar.png";

pub const WAIT_MESSAGE: &str = "Please wait before generating more avatars.";
pub const EMPTY_PROMPT_MESSAGE: &str = "Type something in the text box.";
pub const RATE_LIMITED_MESSAGE: &str =
    "You have reached the avatar generation limit. Wait a few seconds.";
pub const NO_DATA_MESSAGE: &str = "No data returned from API or data is empty";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch";
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Failed to download image";

/// Text-to-avatar screen: a four slot grid, a style picker, a throttled
/// "create" action and a download action for the selected image.
#[derive(Debug, Clone)]
pub struct GeneratorScreen {
    image_urls: Vec<String>,
    loading: bool,
    error: Option<String>,
    selected_image: Option<String>,
    selected_style: AvatarStyle,
    progress: Progress,
    limiter: RateLimiter,
}

impl Default for GeneratorScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorScreen {
    pub fn new() -> Self {
        Self {
            image_urls: PLACEHOLDER_IMAGES.iter().map(|url| url.to_string()).collect(),
            loading: false,
            error: None,
            selected_image: None,
            selected_style: AvatarStyle::default(),
            progress: Progress::default(),
            limiter: RateLimiter::new(GENERATE_COOLDOWN),
        }
    }

    pub fn styles() -> &'static [AvatarStyle] {
        &AvatarStyle::ALL
    }

    pub fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_image(&self) -> Option<&str> {
        self.selected_image.as_deref()
    }

    pub fn selected_style(&self) -> AvatarStyle {
        self.selected_style
    }

    pub fn set_style(&mut self, style: AvatarStyle) {
        self.selected_style = style;
    }

    /// True while the grid still shows the bundled examples.
    pub fn showing_examples(&self) -> bool {
        self.image_urls.iter().all(|url| url.contains("default"))
    }

    pub fn progress(&self, now: Instant) -> u8 {
        self.progress.value(now)
    }

    pub fn select(&mut self, index: usize) -> bool {
        match self.image_urls.get(index) {
            Some(url) => {
                self.selected_image = Some(url.to_string());
                true
            }
            None => false,
        }
    }

    /// Runs the throttle, then the prompt check. Returns the request to send
    /// when the screen has entered its loading state.
    pub fn submit(&mut self, prompt: &str, now: Instant) -> Option<GenerateAvatarDto> {
        if !self.limiter.try_acquire(now) {
            self.error = Some(WAIT_MESSAGE.to_string());
            return None;
        }

        let prompt = prompt.trim();
        if prompt.is_empty() {
            self.error = Some(EMPTY_PROMPT_MESSAGE.to_string());
            return None;
        }

        self.loading = true;
        self.error = None;
        self.progress.start(now);

        Some(GenerateAvatarDto {
            prompt: prompt.to_string(),
            style: self.selected_style.value().to_string(),
        })
    }

    pub fn finish(&mut self, result: Result<GenerationResult, ClientError>, now: Instant) {
        self.loading = false;
        self.progress.stop(now);

        match result {
            Ok(result) if result.data.is_empty() => {
                self.error = Some(NO_DATA_MESSAGE.to_string());
            }
            Ok(result) => {
                self.image_urls = result.data.into_iter().map(|image| image.url).collect();
                self.selected_image = None;
            }
            Err(ClientError::Status { status, .. }) if status == StatusCode::TOO_MANY_REQUESTS => {
                self.error = Some(RATE_LIMITED_MESSAGE.to_string());
            }
            Err(e @ ClientError::Status { .. }) => {
                self.error = Some(e.to_string());
            }
            Err(e) => {
                tracing::warn!(%e, "generate_avatar failed");
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub async fn generate(&mut self, client: &AvatarClient, prompt: &str, now: Instant) {
        let Some(dto) = self.submit(prompt, now) else {
            return;
        };

        let result = client.generate_avatar(&dto).await;
        self.finish(result, Instant::now());
    }

    /// Saves the selected image as `avatar.png` inside `dir`. The file is
    /// written only once the whole processed image has been received.
    pub async fn download(&mut self, client: &AvatarClient, dir: &Path) -> Option<PathBuf> {
        let image_url = self.selected_image.clone()?;

        match save_avatar(client, &image_url, dir).await {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!(%e, "download_avatar failed");
                self.error = Some(DOWNLOAD_FAILED_MESSAGE.to_string());
                None
            }
        }
    }
}

async fn save_avatar(client: &AvatarClient, image_url: &str, dir: &Path) -> Result<PathBuf, ClientError> {
    let bytes = client.download_avatar(image_url).await?;
    let path = dir.join(DOWNLOAD_FILE_NAME);
    tokio::fs::write(&path, &bytes).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use axum::{
        extract::Json as ExtractJson,
        http::StatusCode,
        routing::post,
        Router,
    };
    use image::{Rgba, RgbaImage};
    use serde_json::{json, Value};

    use super::*;
    use crate::{
        app::{
            envy::Envy,
            router,
            util::testing::{png_bytes, spawn, unreachable_url},
        },
        avatars::{models::generation_result::GeneratedImage, util::normalize::AVATAR_SIZE},
        AppState,
    };

    fn urls(count: usize) -> GenerationResult {
        GenerationResult {
            data: (1..=count)
                .map(|i| GeneratedImage {
                    url: format!("https://img.test/{i}.png"),
                })
                .collect(),
        }
    }

    #[test]
    fn starts_with_placeholders_and_default_style() {
        let screen = GeneratorScreen::new();

        assert_eq!(screen.image_urls(), PLACEHOLDER_IMAGES);
        assert!(screen.showing_examples());
        assert!(!screen.is_loading());
        assert_eq!(screen.selected_style(), AvatarStyle::ThreeD);
        assert_eq!(screen.selected_image(), None);
    }

    #[test]
    fn style_picker_lists_every_style() {
        let labels: Vec<&str> = GeneratorScreen::styles()
            .iter()
            .map(|style| style.label())
            .collect();

        assert_eq!(labels, ["3D Avatar", "Cartoon", "Realistic", "Anime"]);
        assert_eq!(GeneratorScreen::styles()[1].value(), "Cartoon Style");
    }

    #[test]
    fn submit_trims_and_carries_style() {
        let mut screen = GeneratorScreen::new();
        screen.set_style(AvatarStyle::Anime);

        let dto = screen.submit("  wizard!! ", Instant::now()).unwrap();
        assert_eq!(dto.prompt, "wizard!!");
        assert_eq!(dto.style, "Anime");
        assert!(screen.is_loading());
        assert_eq!(screen.error(), None);
    }

    #[test]
    fn second_submit_inside_cooldown_is_rejected() {
        let mut screen = GeneratorScreen::new();
        let start = Instant::now();

        assert!(screen.submit("wizard", start).is_some());
        screen.finish(Ok(urls(4)), start + Duration::from_secs(5));

        assert!(screen.submit("dragon", start + Duration::from_secs(30)).is_none());
        assert_eq!(screen.error(), Some(WAIT_MESSAGE));
        assert!(!screen.is_loading());

        // the rejected attempt did not move the window
        assert!(screen.submit("dragon", start + Duration::from_secs(60)).is_some());
    }

    #[test]
    fn empty_prompt_is_rejected_after_throttle() {
        let mut screen = GeneratorScreen::new();
        let start = Instant::now();

        assert!(screen.submit("   ", start).is_none());
        assert_eq!(screen.error(), Some(EMPTY_PROMPT_MESSAGE));
        assert!(!screen.is_loading());

        assert!(screen.submit("wizard", start + Duration::from_secs(1)).is_none());
        assert_eq!(screen.error(), Some(WAIT_MESSAGE));
    }

    #[test]
    fn progress_resets_on_each_load() {
        let mut screen = GeneratorScreen::new();
        let start = Instant::now();

        screen.submit("wizard", start).unwrap();
        assert_eq!(screen.progress(start + Duration::from_millis(300)), 2);
        assert_eq!(screen.progress(start + Duration::from_secs(40)), 100);
        screen.finish(Ok(urls(4)), start + Duration::from_secs(40));

        let again = start + Duration::from_secs(61);
        screen.submit("dragon", again).unwrap();
        assert_eq!(screen.progress(again), 0);
    }

    #[test]
    fn successful_result_replaces_grid_and_clears_selection() {
        let mut screen = GeneratorScreen::new();
        let now = Instant::now();
        screen.select(0);

        screen.submit("wizard", now).unwrap();
        screen.finish(Ok(urls(4)), now);

        assert_eq!(
            screen.image_urls(),
            [
                "https://img.test/1.png",
                "https://img.test/2.png",
                "https://img.test/3.png",
                "https://img.test/4.png"
            ]
        );
        assert!(!screen.showing_examples());
        assert_eq!(screen.selected_image(), None);
        assert!(!screen.is_loading());
    }

    #[test]
    fn failures_always_clear_loading() {
        let now = Instant::now();
        let cases: Vec<(Result<GenerationResult, ClientError>, &str)> = vec![
            (Ok(urls(0)), NO_DATA_MESSAGE),
            (
                Err(ClientError::Status {
                    status: StatusCode::TOO_MANY_REQUESTS,
                    body: "slow down".to_string(),
                }),
                RATE_LIMITED_MESSAGE,
            ),
            (
                Err(ClientError::Status {
                    status: StatusCode::BAD_GATEWAY,
                    body: "upstream down".to_string(),
                }),
                "API call failed with status: 502 Bad Gateway: upstream down",
            ),
            (
                Err(ClientError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "boom",
                ))),
                FETCH_FAILED_MESSAGE,
            ),
        ];

        for (result, message) in cases {
            let mut screen = GeneratorScreen::new();
            screen.submit("wizard", now).unwrap();
            screen.finish(result, now);

            assert!(!screen.is_loading());
            assert_eq!(screen.error(), Some(message));
            assert_eq!(screen.image_urls(), PLACEHOLDER_IMAGES);
        }
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut screen = GeneratorScreen::new();

        assert!(!screen.select(4));
        assert!(screen.select(2));
        assert_eq!(screen.selected_image(), Some("default3.png"));
    }

    #[tokio::test]
    async fn generate_and_download_through_the_backend() {
        let calls = Arc::new(AtomicUsize::new(0));
        let images = {
            let source = png_bytes(RgbaImage::from_pixel(64, 32, Rgba([1, 2, 3, 255])));
            spawn(Router::new().route(
                "/1.png",
                axum::routing::get(move || {
                    let source = source.clone();
                    async move { source }
                }),
            ))
            .await
        };
        let openai = {
            let calls = calls.clone();
            let images = images.clone();
            spawn(Router::new().route(
                "/images/generations",
                post(move |ExtractJson(payload): ExtractJson<Value>| {
                    let calls = calls.clone();
                    let images = images.clone();
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        assert_eq!(payload["prompt"], "Anime avatar of wizard");
                        let data: Vec<Value> = (1..=4)
                            .map(|i| json!({ "url": format!("{}/{}.png", images, i) }))
                            .collect();
                        axum::Json(json!({ "created": 1, "data": data }))
                    }
                }),
            ))
            .await
        };
        let api = spawn(router::router(AppState::new(Envy {
            openai_api_key: Some("sk-test".to_string()),
            openai_api_url: openai,
            ..Envy::default()
        })))
        .await;

        let client = AvatarClient::new(&api);
        let mut screen = GeneratorScreen::new();
        screen.set_style(AvatarStyle::Anime);

        screen.generate(&client, "wizard!!", Instant::now()).await;
        assert_eq!(screen.error(), None);
        assert_eq!(screen.image_urls().len(), 4);
        assert_eq!(screen.image_urls()[0], format!("{}/1.png", images));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // rejected locally, nothing reaches the vendor
        screen.generate(&client, "dragon", Instant::now()).await;
        assert_eq!(screen.error(), Some(WAIT_MESSAGE));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let dir = tempfile::tempdir().unwrap();
        assert_eq!(screen.download(&client, dir.path()).await, None);

        screen.select(0);
        let path = screen.download(&client, dir.path()).await.unwrap();
        assert_eq!(path, dir.path().join("avatar.png"));

        let saved = image::open(&path).unwrap();
        assert_eq!((saved.width(), saved.height()), (AVATAR_SIZE, AVATAR_SIZE));
    }

    #[tokio::test]
    async fn failed_download_writes_nothing() {
        let api = spawn(router::router(AppState::new(Envy::default()))).await;
        let client = AvatarClient::new(&api);
        let mut screen = GeneratorScreen::new();
        let now = Instant::now();

        screen.submit("wizard", now).unwrap();
        screen.finish(
            Ok(GenerationResult {
                data: vec![GeneratedImage {
                    url: format!("{}/gone.png", unreachable_url()),
                }],
            }),
            now,
        );
        screen.select(0);

        let dir = tempfile::tempdir().unwrap();
        assert_eq!(screen.download(&client, dir.path()).await, None);
        assert_eq!(screen.error(), Some(DOWNLOAD_FAILED_MESSAGE));
        assert!(!dir.path().join("avatar.png").exists());
    }

    #[tokio::test]
    async fn unreachable_backend_reports_fetch_failure() {
        let client = AvatarClient::new(&unreachable_url());
        let mut screen = GeneratorScreen::new();

        screen.generate(&client, "wizard", Instant::now()).await;

        assert!(!screen.is_loading());
        assert_eq!(screen.error(), Some(FETCH_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn backend_rate_limit_shows_limit_message() {
        let api = spawn(Router::new().route(
            "/generate-avatar",
            post(|| async { (StatusCode::TOO_MANY_REQUESTS, "Rate limit reached") }),
        ))
        .await;
        let client = AvatarClient::new(&api);
        let mut screen = GeneratorScreen::new();

        screen.generate(&client, "wizard", Instant::now()).await;

        assert_eq!(screen.error(), Some(RATE_LIMITED_MESSAGE));
        assert!(!screen.is_loading());
    }
}
