// Copyright (c) 2025 gdns2tf contributors
// SPDX-License-Identifier: MIT

//! Unit tests for `terraform`

#[cfg(test)]
mod tests {
    use crate::records::RecordSet;
    use crate::terraform::{
        format_rrdatas, import_command, render_resource, resource_filename, resource_identifier,
    };

    fn record(name: &str, record_type: &str, ttl: &str, data: &str) -> RecordSet {
        RecordSet {
            name: name.to_string(),
            record_type: record_type.to_string(),
            ttl: ttl.to_string(),
            data: data.to_string(),
        }
    }

    #[test]
    fn test_resource_identifier_replaces_non_alphanumerics() {
        assert_eq!(
            resource_identifier("www.example.com", "A"),
            "www_example_com_a"
        );
        assert_eq!(
            resource_identifier("_sip._tcp.example.com.", "SRV"),
            "_sip__tcp_example_com__srv"
        );
    }

    #[test]
    fn test_resource_identifier_lowercases() {
        assert_eq!(
            resource_identifier("WWW.Example.COM", "CNAME"),
            "www_example_com_cname"
        );
    }

    #[test]
    fn test_resource_identifier_is_idempotent() {
        let first = resource_identifier("mail.example.com.", "MX");
        let second = resource_identifier("mail.example.com.", "MX");
        assert_eq!(first, second);
    }

    #[test]
    fn test_resource_filename_keeps_uppercase_type() {
        assert_eq!(
            resource_filename("www.example.com.", "A"),
            "www_example_com_A_.tf"
        );
    }

    #[test]
    fn test_format_rrdatas_wraps_plain_data_in_quotes() {
        assert_eq!(format_rrdatas("A", "1.2.3.4"), vec!["\"1.2.3.4\""]);
        assert_eq!(
            format_rrdatas("CNAME", "example.com."),
            vec!["\"example.com.\""]
        );
    }

    #[test]
    fn test_format_rrdatas_txt_reuses_provider_quotes_as_delimiter() {
        assert_eq!(
            format_rrdatas("TXT", "\"v=spf1 include:_spf.google.com ~all\""),
            vec!["\"v=spf1 include:_spf.google.com ~all\""]
        );
    }

    #[test]
    fn test_format_rrdatas_txt_escapes_embedded_quotes() {
        assert_eq!(
            format_rrdatas("TXT", "\"key=\"quoted\" rest\""),
            vec!["\"key=\\\"quoted\\\" rest\""]
        );
    }

    #[test]
    fn test_format_rrdatas_srv_splits_on_commas() {
        let values = format_rrdatas(
            "SRV",
            "10 5 5060 sip.example.com,20 10 5060 sip2.example.com",
        );
        assert_eq!(
            values,
            vec![
                "\"10 5 5060 sip.example.com\"",
                "\"20 10 5060 sip2.example.com\"",
            ]
        );
    }

    #[test]
    fn test_format_rrdatas_srv_single_value_stays_a_list_entry() {
        let values = format_rrdatas("SRV", "0 5 5060 sip.example.com.");
        assert_eq!(values, vec!["\"0 5 5060 sip.example.com.\""]);
    }

    #[test]
    fn test_format_rrdatas_srv_quotes_and_commas_only_yields_no_values() {
        assert!(format_rrdatas("SRV", "\",\"").is_empty());
        assert!(format_rrdatas("SRV", ",").is_empty());
    }

    #[test]
    fn test_render_resource_srv_with_no_values_emits_empty_list() {
        // Degenerate data that still passes row validation renders as an
        // empty rrdatas list rather than a panic or a bogus entry
        let rendered = render_resource(&record("example.com.", "SRV", "300", ","), "prod");
        assert!(rendered.contains("rrdatas = [\n\x20 ]"));
    }

    #[test]
    fn test_render_resource_a_record() {
        let rendered = render_resource(&record("www.example.com", "A", "300", "1.2.3.4"), "prod");

        assert_eq!(
            rendered,
            "resource \"google_dns_record_set\" \"www_example_com_a\" {\n\
             \x20 name         = \"www.example.com\"\n\
             \x20 type         = \"A\"\n\
             \x20 ttl          = 300\n\
             \x20 managed_zone = \"prod\"\n\
             \n\
             \x20 rrdatas = [\"1.2.3.4\"]\n\
             }\n"
        );
    }

    #[test]
    fn test_render_resource_srv_record_is_multiline() {
        let rendered = render_resource(
            &record(
                "_sip._tcp.example.com.",
                "SRV",
                "3600",
                "10 5 5060 sip.example.com,20 10 5060 sip2.example.com",
            ),
            "prod",
        );

        assert!(rendered.contains(
            "rrdatas = [\n\
             \x20   \"10 5 5060 sip.example.com\",\n\
             \x20   \"20 10 5060 sip2.example.com\",\n\
             \x20 ]"
        ));
    }

    #[test]
    fn test_render_resource_txt_record_is_single_scalar() {
        let rendered = render_resource(
            &record(
                "example.com.",
                "TXT",
                "300",
                "\"v=spf1 include:_spf.google.com ~all\"",
            ),
            "prod",
        );

        assert!(rendered.contains("rrdatas = [\"v=spf1 include:_spf.google.com ~all\"]"));
    }

    #[test]
    fn test_import_command_encodes_project_zone_name_and_type() {
        let line = import_command(
            &record("www.example.com", "A", "300", "1.2.3.4"),
            "my-project",
            "prod",
        );

        assert_eq!(
            line,
            "terraform import google_dns_record_set.www_example_com_a \
             \"projects/my-project/managedZones/prod/rrsets/www.example.com/A\""
        );
    }
}
