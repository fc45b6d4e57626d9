use std::net::SocketAddr;

use axum::Router;

/// Serves `router` on an ephemeral local port and returns its base url.
pub async fn spawn(router: Router) -> String {
    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let server = axum::Server::bind(&addr)
        .serve(router.into_make_service_with_connect_info::<SocketAddr>());
    let addr = server.local_addr();

    tokio::spawn(async move {
        let _ = server.await;
    });

    format!("http://{}", addr)
}

/// Base url that nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}", addr)
}

pub fn png_bytes(image: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(image)
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}
