//! Full-pipeline invocation against the recording transport.

#[cfg(test)]
mod tests {
    use crate::{RecordingTransport, TEST_ACCESS_KEY, TEST_SECRET_KEY, api, fixed_now};
    use shapeshift_client::InvokeOptions;

    fn signed_options() -> InvokeOptions {
        InvokeOptions::new().with_keys(TEST_ACCESS_KEY, TEST_SECRET_KEY)
    }

    #[tokio::test]
    async fn test_should_reproduce_reference_query_signature_end_to_end() {
        let op = api("demoservice").operation("DescribeThing").unwrap();
        let transport = RecordingTransport::new();

        op.invoke_at(&transport, &signed_options(), fixed_now())
            .await
            .unwrap();

        let request = transport.only_request();
        assert_eq!(request.method, "POST");
        assert_eq!(request.url, "https://demoservice.us-east-1.amazonaws.com/");
        assert_eq!(request.body, "Action=DescribeThing&Version=2021-01-01");
        assert_eq!(request.headers.get("x-amz-date").unwrap(), "20210101T000000Z");
        assert_eq!(
            request.headers.get("authorization").unwrap(),
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20210101/us-east-1/demoservice/aws4_request, \
             SignedHeaders=content-type;host;x-amz-date, \
             Signature=8eb75ff930ad800297bfd7a318976acd616887d4500b0900f66702ef92f0a350"
        );
    }

    #[tokio::test]
    async fn test_should_pass_transport_response_through_unmodified() {
        let op = api("demoservice").operation("DescribeThing").unwrap();
        let transport = RecordingTransport::new();

        let response = op
            .invoke_at(&transport, &signed_options(), fixed_now())
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(&response.body[..], b"{}");
    }

    #[tokio::test]
    async fn test_should_resolve_global_endpoint_through_credential_scope() {
        let op = api("globalsvc").operation("Ping").unwrap();
        let transport = RecordingTransport::new();

        op.invoke_at(&transport, &signed_options(), fixed_now())
            .await
            .unwrap();

        let request = transport.only_request();
        // aws-global entry: host from the table, region from its scope.
        assert_eq!(request.url, "https://globalsvc.amazonaws.com/");
        let authorization = request
            .headers
            .get("authorization")
            .unwrap()
            .to_str()
            .unwrap()
            .to_owned();
        assert!(authorization.contains("/us-east-1/globalsvc/aws4_request"));
    }

    #[tokio::test]
    async fn test_should_sign_session_token_when_supplied() {
        let op = api("demoservice").operation("DescribeThing").unwrap();
        let transport = RecordingTransport::new();
        let options = InvokeOptions::new().with_credentials(
            shapeshift_auth::Credentials::new(TEST_ACCESS_KEY, TEST_SECRET_KEY)
                .with_session_token("the-token"),
        );

        op.invoke_at(&transport, &options, fixed_now()).await.unwrap();

        let request = transport.only_request();
        assert_eq!(
            request.headers.get("x-amz-security-token").unwrap(),
            "the-token"
        );
        let authorization = request
            .headers
            .get("authorization")
            .unwrap()
            .to_str()
            .unwrap()
            .to_owned();
        assert!(authorization.contains(
            "SignedHeaders=content-type;host;x-amz-date;x-amz-security-token"
        ));
    }

    #[tokio::test]
    async fn test_should_not_dispatch_without_credentials() {
        let op = api("demoservice").operation("DescribeThing").unwrap();
        let transport = RecordingTransport::new();

        let result = op
            .invoke_at(&transport, &InvokeOptions::new(), fixed_now())
            .await;
        assert!(result.is_err());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_should_honor_region_and_signing_name_overrides() {
        let op = api("demoservice").operation("DescribeThing").unwrap();
        let transport = RecordingTransport::new();
        let options = signed_options()
            .with_region("eu-west-1")
            .with_signing_name("renamed");

        op.invoke_at(&transport, &options, fixed_now()).await.unwrap();

        let request = transport.only_request();
        assert_eq!(
            request.url,
            "https://demoservice.eu-west-1.amazonaws.com/"
        );
        let authorization = request
            .headers
            .get("authorization")
            .unwrap()
            .to_str()
            .unwrap()
            .to_owned();
        assert!(authorization.contains("/eu-west-1/renamed/aws4_request"));
    }
}
