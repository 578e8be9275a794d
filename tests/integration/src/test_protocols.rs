//! Per-protocol wire format assertions.

#[cfg(test)]
mod tests {
    use crate::{RecordingTransport, TEST_ACCESS_KEY, TEST_SECRET_KEY, api, fixed_now};
    use shapeshift_client::InvokeOptions;

    fn signed_options() -> InvokeOptions {
        InvokeOptions::new().with_keys(TEST_ACCESS_KEY, TEST_SECRET_KEY)
    }

    #[tokio::test]
    async fn test_should_format_json_protocol_with_versioned_content_type() {
        let op = api("demojson").operation("DescribeThing").unwrap();
        let transport = RecordingTransport::new();

        op.invoke_at(&transport, &signed_options(), fixed_now())
            .await
            .unwrap();

        let request = transport.only_request();
        assert_eq!(
            request.headers.get("content-type").unwrap(),
            "application/x-amz-json-1.1"
        );
        assert_eq!(
            request.headers.get("x-amz-target").unwrap(),
            "DemoService_20210101.DescribeThing"
        );
        assert_eq!(request.body, "{}");
        assert_eq!(
            request.headers.get("authorization").unwrap(),
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20210101/us-east-1/demoservice/aws4_request, \
             SignedHeaders=content-type;host;x-amz-date;x-amz-target, \
             Signature=7bb220c0d6222de61caaacb4adf653d3c492c21d6923b244f65b41cbddf6dc14"
        );
    }

    #[tokio::test]
    async fn test_should_encode_synthesized_tree_as_json_body() {
        let api = crate::api("demojson")
            .with_sampler(std::sync::Arc::new(shapeshift_synth::FixedSampler(
                "t-00000000".to_owned(),
            )));
        let op = api.operation("GetThing").unwrap();
        let transport = RecordingTransport::new();

        op.invoke_at(&transport, &signed_options(), fixed_now())
            .await
            .unwrap();

        let request = transport.only_request();
        assert_eq!(request.body, r#"{"ThingId":"t-00000000"}"#);
    }

    #[tokio::test]
    async fn test_should_send_protocol_mandated_fields_only_with_no_params() {
        // query: Action/Version only.
        let op = api("demoservice").operation("CreateThing").unwrap();
        let transport = RecordingTransport::new();
        op.invoke_at(
            &transport,
            &signed_options().without_params(),
            fixed_now(),
        )
        .await
        .unwrap();
        assert_eq!(
            transport.only_request().body,
            "Action=CreateThing&Version=2021-01-01"
        );

        // json: bare empty object.
        let op = api("demojson").operation("GetThing").unwrap();
        let transport = RecordingTransport::new();
        op.invoke_at(
            &transport,
            &signed_options().without_params(),
            fixed_now(),
        )
        .await
        .unwrap();
        assert_eq!(transport.only_request().body, "{}");
    }

    #[tokio::test]
    async fn test_should_strip_rest_json_uri_placeholders() {
        let op = api("demorest").operation("GetThing").unwrap();
        let transport = RecordingTransport::new();

        op.invoke_at(&transport, &signed_options(), fixed_now())
            .await
            .unwrap();

        let request = transport.only_request();
        assert_eq!(request.method, "GET");
        assert_eq!(
            request.url,
            "https://demoservice.us-east-1.amazonaws.com/things/"
        );
        assert_eq!(request.headers.get("content-type").unwrap(), "application/json");
        assert!(request.headers.get("x-amz-target").is_none());
    }

    #[tokio::test]
    async fn test_should_sign_rest_json_empty_object_as_empty_payload() {
        let op = api("demorest").operation("GetThing").unwrap();

        // Same invocation, body replaced: `{}` and the empty string must sign
        // identically under the rest-json payload convention.
        let transport = RecordingTransport::new();
        op.invoke_at(&transport, &signed_options(), fixed_now())
            .await
            .unwrap();
        let via_pipeline = transport.only_request();
        assert_eq!(via_pipeline.body, "{}");

        let credentials =
            shapeshift_auth::Credentials::new(TEST_ACCESS_KEY, TEST_SECRET_KEY);
        let params = shapeshift_auth::SigningParams {
            credentials: &credentials,
            method: "GET",
            region: "us-east-1",
            signing_name: "demoservice",
            endpoint: "https://demoservice.us-east-1.amazonaws.com",
            now: fixed_now(),
            payload_policy: shapeshift_auth::PayloadPolicy::Exact,
        };
        let mut headers = via_pipeline.headers.clone();
        headers.remove("authorization");
        let with_empty_body =
            shapeshift_auth::sign_request(&params, &headers, "/things/", "").unwrap();

        assert_eq!(
            via_pipeline.headers.get("authorization").unwrap(),
            with_empty_body.headers.get("authorization").unwrap()
        );
    }

    #[tokio::test]
    async fn test_should_apply_header_overrides_but_recompute_date() {
        let op = api("demoservice").operation("DescribeThing").unwrap();
        let transport = RecordingTransport::new();
        let options = signed_options()
            .with_header("x-custom", "kept")
            .with_header("x-amz-date", "19990101T000000Z");

        op.invoke_at(&transport, &options, fixed_now()).await.unwrap();

        let request = transport.only_request();
        assert_eq!(request.headers.get("x-custom").unwrap(), "kept");
        assert_eq!(request.headers.get("x-amz-date").unwrap(), "20210101T000000Z");
        let authorization = request
            .headers
            .get("authorization")
            .unwrap()
            .to_str()
            .unwrap()
            .to_owned();
        assert!(authorization.contains("x-custom"));
    }
}
