//! Catalog loading and service introspection.

#[cfg(test)]
mod tests {
    use crate::{api, catalog};
    use shapeshift_model::Protocol;

    #[test]
    fn test_should_load_only_sigv4_services() {
        let catalog = catalog();
        let names: Vec<&str> = catalog.service_names().collect();
        assert_eq!(names, vec!["demojson", "demorest", "demoservice", "globalsvc"]);
        assert!(catalog.service("legacysvc").is_err());
    }

    #[test]
    fn test_should_bind_latest_api_version() {
        let catalog = catalog();
        let service = catalog.service("demoservice").unwrap();
        assert_eq!(service.latest_version(), "2021-01-01");
        assert_eq!(
            service.api_versions().collect::<Vec<_>>(),
            vec!["2020-06-15", "2021-01-01"]
        );
        let older = service.version("2020-06-15").unwrap();
        assert_eq!(older.metadata.api_version, "2020-06-15");
        assert!(service.version("1999-01-01").is_none());

        let api = api("demoservice");
        assert_eq!(api.metadata().api_version, "2021-01-01");
        assert_eq!(api.protocol().unwrap(), Protocol::Query);
    }

    #[test]
    fn test_should_list_operations_of_the_bound_version() {
        let api = api("demoservice");
        let mut names: Vec<&str> = api.operation_names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["CreateThing", "DescribeThing"]);
    }
}
