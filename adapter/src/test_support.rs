use axum::Router;
use shared::config::SupabaseConfig;

use crate::supabase::SupabaseClient;

pub(crate) async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    format!("http://{addr}")
}

pub(crate) fn client_for(base_url: &str) -> SupabaseClient {
    SupabaseClient::new(&SupabaseConfig {
        url: base_url.into(),
        api_key: "test-key".into(),
        image_bucket: "playspace-images".into(),
    })
    .unwrap()
}
