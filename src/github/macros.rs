/// `get!(client, url)` or `get!(client, url, [(key, value), ...])`.
///
/// Sends a GET with the GitHub headers of `client` and resolves to
/// `Result<Response, http::Error>`. Must be used inside an async context.
#[macro_export]
macro_rules! get {
    ($client:expr, $url:expr) => {
        $crate::get!($client, $url, [])
    };
    ($client:expr, $url:expr, [$(($key:expr, $value:expr)),* $(,)?]) => {{
        use $crate::http::ClientRequestBuilder;

        let client = &$client;
        client
            .http()
            .get($url)
            .github_headers(client.token())
            $(.query($key, $value))*
            .send()
            .await
    }};
}

#[macro_export]
macro_rules! post {
    ($client:expr, $url:expr, $body:expr) => {{
        use $crate::http::ClientRequestBuilder;

        let client = &$client;
        client
            .http()
            .post($url)
            .json_content_headers(client.token())
            .body($body)
            .send()
            .await
    }};
}
