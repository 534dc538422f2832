#[cfg(test)]
mod unit_tests {
    use crate::resolver::resolve;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    #[tokio::test]
    async fn literal_ipv4_resolves_without_lookup() {
        let ip = resolve("127.0.0.1").await.unwrap();
        assert_eq!(ip, IpAddr::V4(Ipv4Addr::LOCALHOST));
    }

    #[tokio::test]
    async fn literal_ipv6_resolves_without_lookup() {
        let ip = resolve("::1").await.unwrap();
        assert_eq!(ip, IpAddr::V6(Ipv6Addr::LOCALHOST));
    }

    #[tokio::test]
    async fn invalid_name_fails_with_original_input() {
        let err = resolve("definitely-not-a-real-host.invalid")
            .await
            .unwrap_err();
        assert_eq!(err.input(), "definitely-not-a-real-host.invalid");
    }
}
