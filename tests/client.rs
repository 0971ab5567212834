use mockito::{Matcher, Mock, Server, ServerGuard};
use quickimgur::config::error::ConfigError;
use quickimgur::{
    Credentials, Error, ImageUploadOptions, ImgurClient, UploadPayload, VideoUploadOptions,
};
use std::io::Write;

const ACCESS_TOKEN: &str = "test_access_token";

fn credentials() -> Credentials {
    Credentials::new("client_id_123", "client_secret_456", "refresh_token_789")
}

fn mock_token_endpoint(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/oauth2/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("refresh_token".into(), "refresh_token_789".into()),
            Matcher::UrlEncoded("client_id".into(), "client_id_123".into()),
            Matcher::UrlEncoded("client_secret".into(), "client_secret_456".into()),
            Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"access_token":"{}","expires_in":315360000,"token_type":"bearer","refresh_token":"refresh_token_789","account_username":"tester"}}"#,
            ACCESS_TOKEN
        ))
        .create()
}

fn upload_response() -> &'static str {
    r#"{"data":{"id":"abc123","link":"https://i.imgur.com/abc123.png","type":"image/png"},"success":true,"status":200}"#
}

fn connect(server: &mut ServerGuard) -> (ImgurClient, Mock) {
    let token_mock = mock_token_endpoint(server);
    let client = ImgurClient::with_base_url(credentials(), &server.url())
        .expect("client construction should succeed");
    (client, token_mock)
}

#[test]
fn test_construction_obtains_access_token() {
    let mut server = Server::new();
    let (client, token_mock) = connect(&mut server);

    token_mock.assert();
    assert_eq!(client.access_token(), ACCESS_TOKEN);
    assert_eq!(client.credentials(), &credentials());
}

#[test]
fn test_missing_credential_fails_before_any_request() {
    let mut server = Server::new();
    let token_mock = server.mock("POST", "/oauth2/token").expect(0).create();

    let incomplete = Credentials::new("client_id_123", "", "refresh_token_789");
    let err = ImgurClient::with_base_url(incomplete, &server.url()).unwrap_err();

    token_mock.assert();
    assert!(matches!(
        err,
        Error::Config(ConfigError::MissingCredential { name: "IMGUR_CLIENT_SECRET" })
    ));
}

#[test]
fn test_token_endpoint_failure_is_propagated() {
    let mut server = Server::new();
    let token_mock = server
        .mock("POST", "/oauth2/token")
        .with_status(403)
        .with_body(r#"{"data":{"error":"Invalid client"},"success":false,"status":403}"#)
        .expect(1)
        .create();

    let err = ImgurClient::with_base_url(credentials(), &server.url()).unwrap_err();

    token_mock.assert();
    assert!(matches!(err, Error::Infra(_)));
    assert_eq!(err.status_code(), Some(403));
}

#[test]
fn test_upload_image_url_passthrough_carries_bearer_token() {
    let mut server = Server::new();
    let (client, _token_mock) = connect(&mut server);

    let upload_mock = server
        .mock("POST", "/3/image")
        .match_header("authorization", format!("Bearer {}", ACCESS_TOKEN).as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("image".into(), "https://example.com/a.png".into()),
            Matcher::UrlEncoded("type".into(), "url".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(upload_response())
        .create();

    let response = client
        .upload_image("https://example.com/a.png", &ImageUploadOptions::default())
        .unwrap();

    upload_mock.assert();
    assert_eq!(response["data"]["id"], "abc123");
    assert_eq!(response["success"], true);
}

#[test]
fn test_upload_image_does_not_send_title_or_description() {
    let mut server = Server::new();
    let (client, _token_mock) = connect(&mut server);

    let upload_mock = server
        .mock("POST", "/3/image")
        .match_body(Matcher::Exact("image=YWJj&type=base64".to_string()))
        .with_status(200)
        .with_body(upload_response())
        .create();

    let options = ImageUploadOptions {
        title: Some("Title".to_string()),
        description: Some("Description".to_string()),
        force_base64: false,
    };
    client
        .upload_image(UploadPayload::Bytes(b"abc".to_vec()), &options)
        .unwrap();

    upload_mock.assert();
}

#[test]
fn test_upload_image_from_local_file() {
    let mut server = Server::new();
    let (client, _token_mock) = connect(&mut server);

    let contents = b"0123456789";
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();

    let upload_mock = server
        .mock("POST", "/3/image")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("image".into(), "MDEyMzQ1Njc4OQ==".into()),
            Matcher::UrlEncoded("type".into(), "base64".into()),
        ]))
        .with_status(200)
        .with_body(upload_response())
        .create();

    client
        .upload_image(file.path(), &ImageUploadOptions::default())
        .unwrap();

    upload_mock.assert();
}

#[test]
fn test_upload_image_force_base64_downloads_url() {
    let mut server = Server::new();
    let (client, _token_mock) = connect(&mut server);

    let download_mock = server
        .mock("GET", "/remote.png")
        .with_status(200)
        .with_body("abc")
        .create();
    let upload_mock = server
        .mock("POST", "/3/image")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("image".into(), "YWJj".into()),
            Matcher::UrlEncoded("type".into(), "base64".into()),
        ]))
        .with_status(200)
        .with_body(upload_response())
        .create();

    let options = ImageUploadOptions {
        force_base64: true,
        ..Default::default()
    };
    client
        .upload_image(format!("{}/remote.png", server.url()), &options)
        .unwrap();

    download_mock.assert();
    upload_mock.assert();
}

#[test]
fn test_upload_video_with_metadata() {
    let mut server = Server::new();
    let (client, _token_mock) = connect(&mut server);

    let upload_mock = server
        .mock("POST", "/3/image")
        .match_header("authorization", format!("Bearer {}", ACCESS_TOKEN).as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("video".into(), "YWJj".into()),
            Matcher::UrlEncoded("type".into(), "base64".into()),
            Matcher::UrlEncoded("title".into(), "t".into()),
            Matcher::UrlEncoded("description".into(), "d".into()),
            Matcher::UrlEncoded("disable_audio".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body(upload_response())
        .create();

    let options = VideoUploadOptions {
        title: Some("t".to_string()),
        description: Some("d".to_string()),
        disable_audio: true,
        force_base64: false,
    };
    client
        .upload_video(b"abc".to_vec(), &options)
        .unwrap();

    upload_mock.assert();
}

#[test]
fn test_upload_video_without_metadata_omits_keys() {
    let mut server = Server::new();
    let (client, _token_mock) = connect(&mut server);

    let upload_mock = server
        .mock("POST", "/3/image")
        .match_body(Matcher::Exact(
            "video=YWJj&type=base64&disable_audio=false".to_string(),
        ))
        .with_status(200)
        .with_body(upload_response())
        .create();

    client
        .upload_video(b"abc".to_vec(), &VideoUploadOptions::default())
        .unwrap();

    upload_mock.assert();
}

#[test]
fn test_upload_failure_is_an_error() {
    let mut server = Server::new();
    let (client, _token_mock) = connect(&mut server);

    let upload_mock = server
        .mock("POST", "/3/image")
        .with_status(400)
        .with_body(r#"{"data":{"error":"Bad Request"},"success":false,"status":400}"#)
        .create();

    let err = client
        .upload_image(b"abc".to_vec(), &ImageUploadOptions::default())
        .unwrap_err();

    upload_mock.assert();
    assert!(matches!(err, Error::Infra(_)));
    assert_eq!(err.status_code(), Some(400));
}

#[test]
fn test_upload_missing_file_skips_network() {
    let mut server = Server::new();
    let (client, _token_mock) = connect(&mut server);

    let upload_mock = server.mock("POST", "/3/image").expect(0).create();

    let dir = tempfile::tempdir().unwrap();
    let err = client
        .upload_video(dir.path().join("missing.mp4"), &VideoUploadOptions::default())
        .unwrap_err();

    upload_mock.assert();
    assert!(matches!(err, Error::Domain(_)));
}
