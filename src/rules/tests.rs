use std::sync::Arc;

use crate::cache::NullCache;
use crate::{ClientHints, DefaultRules, Detector, parse, parse_with_hints};

#[test]
fn browser_examples_matching() {
    // Array of (expected_name, expected_version, input_string)
    let cases: Vec<(&str, &str, &str)> = vec![
        (
            "Chrome",
            "119.0.6045.123",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/119.0.6045.123 Safari/537.36",
        ),
        (
            "Chrome Mobile",
            "119.0.6045.66",
            "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/119.0.6045.66 Mobile Safari/537.36",
        ),
        (
            "Chrome Webview",
            "119.0.6045.66",
            "Mozilla/5.0 (Linux; Android 10; K; wv) AppleWebKit/537.36 (KHTML, like Gecko) \
             Version/4.0 Chrome/119.0.6045.66 Mobile Safari/537.36",
        ),
        (
            "Chrome Mobile iOS",
            "119.0.6045.109",
            "Mozilla/5.0 (iPhone; CPU iPhone OS 16_6 like Mac OS X) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) CriOS/119.0.6045.109 Mobile/15E148 Safari/604.1",
        ),
        (
            "Chromium",
            "37.0.2062.94",
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Ubuntu Chromium/37.0.2062.94 Chrome/37.0.2062.94 Safari/537.36",
        ),
        (
            "Headless Chrome",
            "118.0.5993.117",
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
             HeadlessChrome/118.0.5993.117 Safari/537.36",
        ),
        (
            "Brave",
            "1.60.114",
            "Mozilla/5.0 (Linux; Android 13) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/119.0.0.0 Mobile Safari/537.36 Brave/1.60.114",
        ),
        (
            "Vivaldi",
            "6.4.3160.47",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/118.0.0.0 Safari/537.36 Vivaldi/6.4.3160.47",
        ),
        (
            "Yandex Browser",
            "22.11.3.838",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/106.0.0.0 YaBrowser/22.11.3.838 Yowser/2.5 Safari/537.36",
        ),
        (
            "Samsung Browser",
            "23.0",
            "Mozilla/5.0 (Linux; Android 13; SM-S918B) AppleWebKit/537.36 (KHTML, like Gecko) \
             SamsungBrowser/23.0 Chrome/115.0.0.0 Mobile Safari/537.36",
        ),
        (
            "UC Browser",
            "13.4.0.1306",
            "Mozilla/5.0 (Linux; U; Android 13; en-US; SM-A135M) AppleWebKit/537.36 \
             (KHTML, like Gecko) Version/4.0 Chrome/100.0.4896.58 UCBrowser/13.4.0.1306 \
             Mobile Safari/537.36",
        ),
        (
            "Opera",
            "105.0.0.0",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/119.0.0.0 Safari/537.36 OPR/105.0.0.0",
        ),
        (
            "Opera",
            "12.18",
            "Opera/9.80 (Windows NT 6.1; WOW64) Presto/2.12.388 Version/12.18",
        ),
        ("Opera", "9.64", "Opera/9.64 (Windows NT 5.1; U; en) Presto/2.1.1"),
        (
            "Opera Mini",
            "9.80",
            "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80 (S60; SymbOS; Opera Mobi/23.348; U; en) \
             Presto/2.5.25 Version/10.54",
        ),
        (
            "Opera Mobile",
            "11.50",
            "Opera/9.80 (Android 2.3.3; Linux; Opera Mobi/ADR-1111101157; U; es-ES) \
             Presto/2.9.201 Version/11.50",
        ),
        (
            "Opera GX",
            "2.2.1",
            "Mozilla/5.0 (Linux; Android 10) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/117.0.0.0 Mobile Safari/537.36 OPR/73.3.3216.58675 OPX/2.2.1",
        ),
        (
            "Microsoft Edge",
            "119.0.2151.97",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/119.0.0.0 Safari/537.36 Edg/119.0.2151.97",
        ),
        (
            "Microsoft Edge",
            "18.17763",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/64.0.3282.140 Safari/537.36 Edge/18.17763",
        ),
        (
            "Microsoft Edge",
            "119.0.2151.78",
            "Mozilla/5.0 (Linux; Android 13; SM-S918B) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/119.0.6045.66 Mobile Safari/537.36 EdgA/119.0.2151.78",
        ),
        (
            "Microsoft Edge",
            "119.2151.78",
            "Mozilla/5.0 (iPhone; CPU iPhone OS 16_6 like Mac OS X) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) EdgiOS/119.2151.78 Version/16.0 Mobile/15E148 Safari/604.1",
        ),
        (
            "Firefox",
            "119.0",
            "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/119.0",
        ),
        (
            "Firefox Mobile",
            "119.0",
            "Mozilla/5.0 (Android 13; Mobile; rv:109.0) Gecko/109.0 Firefox/119.0",
        ),
        (
            "Firefox Mobile iOS",
            "119.0",
            "Mozilla/5.0 (iPhone; CPU iPhone OS 16_6 like Mac OS X) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) FxiOS/119.0 Mobile/15E148 Safari/605.1.15",
        ),
        (
            "Waterfox",
            "102.10.0",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:102.0) Gecko/20100101 Firefox/102.0 \
             Waterfox/102.10.0",
        ),
        (
            "SeaMonkey",
            "2.53.17",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:102.0) Gecko/20100101 Firefox/102.0 \
             SeaMonkey/2.53.17",
        ),
        (
            "Pale Moon",
            "32.5.1",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:102.0) Gecko/20100101 Goanna/6.3 \
             Firefox/102.0 PaleMoon/32.5.1",
        ),
        (
            "Internet Explorer",
            "10.0",
            "Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.2; Trident/6.0)",
        ),
        (
            "Internet Explorer",
            "11.0",
            "Mozilla/5.0 (Windows NT 10.0; WOW64; Trident/7.0; rv:11.0) like Gecko",
        ),
        (
            "IE Mobile",
            "10.0",
            "Mozilla/5.0 (compatible; MSIE 10.0; Windows Phone 8.0; Trident/6.0; IEMobile/10.0; \
             ARM; Touch; NOKIA; Lumia 920)",
        ),
        (
            "Safari",
            "17.1",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
        ),
        (
            "Safari",
            "",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Safari/605.1.15",
        ),
        (
            "Mobile Safari",
            "16.6",
            "Mozilla/5.0 (iPhone; CPU iPhone OS 16_6 like Mac OS X) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1",
        ),
        (
            "Mobile Safari",
            "",
            "Mozilla/5.0 (Linux; U; Android 2.3.6; en-us; GT-S5570) AppleWebKit/533.1 \
             (KHTML, like Gecko) Mobile Safari/533.1",
        ),
        (
            "Android Browser",
            "4.0",
            "Mozilla/5.0 (Linux; U; Android 4.2.2; en-us; GT-I9500 Build/JDQ39) \
             AppleWebKit/534.30 (KHTML, like Gecko) Version/4.0 Mobile Safari/534.30",
        ),
        (
            "DuckDuckGo Privacy Browser",
            "5",
            "Mozilla/5.0 (Linux; Android 10) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 \
             Chrome/119.0.6045.66 Mobile Safari/537.36 DuckDuckGo/5",
        ),
    ];

    for (name, version, input) in cases {
        let got = parse(input);
        assert_eq!(name, got.client.name, "name for \"{input}\"");
        assert_eq!(version, got.client.version, "version for \"{input}\"");
        assert!(got.client.known, "known for \"{input}\"");
    }
}

#[test]
fn engine_examples_matching() {
    // Array of (expected_engine, expected_engine_version, input_string)
    let cases: Vec<(&str, &str, &str)> = vec![
        (
            "Blink",
            "119.0.6045.123",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/119.0.6045.123 Safari/537.36",
        ),
        // No Blink token in the text and no threshold line for OPR, so the
        // version stays empty.
        (
            "Blink",
            "",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/119.0.0.0 Safari/537.36 OPR/105.0.0.0",
        ),
        (
            "Edge",
            "18.17763",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/64.0.3282.140 Safari/537.36 Edge/18.17763",
        ),
        // Gecko build dates never read as engine versions.
        (
            "Gecko",
            "",
            "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/119.0",
        ),
        (
            "Gecko",
            "109.0",
            "Mozilla/5.0 (Android 13; Mobile; rv:109.0) Gecko/109.0 Firefox/119.0",
        ),
        (
            "Goanna",
            "6.3",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:102.0) Gecko/20100101 Goanna/6.3 \
             Firefox/102.0 PaleMoon/32.5.1",
        ),
        (
            "Trident",
            "6.0",
            "Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.2; Trident/6.0)",
        ),
        (
            "Trident",
            "7.0",
            "Mozilla/5.0 (Windows NT 10.0; WOW64; Trident/7.0; rv:11.0) like Gecko",
        ),
        (
            "Presto",
            "2.5.25",
            "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80 (S60; SymbOS; Opera Mobi/23.348; U; en) \
             Presto/2.5.25 Version/10.54",
        ),
        // Threshold lines track the browser version, not the Presto token.
        ("Presto", "12.18", "Opera/9.80 (Windows NT 6.1; WOW64) Presto/2.12.388 Version/12.18"),
        (
            "WebKit",
            "605.1.15",
            "Mozilla/5.0 (iPhone; CPU iPhone OS 16_6 like Mac OS X) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1",
        ),
    ];

    for (engine, engine_version, input) in cases {
        let got = parse(input);
        assert_eq!(engine, got.client.engine, "engine for \"{input}\"");
        assert_eq!(engine_version, got.client.engine_version, "engine version for \"{input}\"");
    }
}

#[test]
fn short_name_and_family_examples() {
    // Array of (expected_short, expected_family, input_string)
    let cases: Vec<(&str, &str, &str)> = vec![
        (
            "CM",
            "Chrome",
            "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/119.0.6045.66 Mobile Safari/537.36",
        ),
        (
            "PS",
            "Internet Explorer",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/119.0.0.0 Safari/537.36 Edg/119.0.2151.97",
        ),
        (
            "OG",
            "Opera",
            "Mozilla/5.0 (Linux; Android 10) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/117.0.0.0 Mobile Safari/537.36 OPR/73.3.3216.58675 OPX/2.2.1",
        ),
        (
            "WF",
            "Firefox",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:102.0) Gecko/20100101 Firefox/102.0 \
             Waterfox/102.10.0",
        ),
        (
            "UC",
            "Chrome",
            "Mozilla/5.0 (Linux; U; Android 13; en-US; SM-A135M) AppleWebKit/537.36 \
             (KHTML, like Gecko) Version/4.0 Chrome/100.0.4896.58 UCBrowser/13.4.0.1306 \
             Mobile Safari/537.36",
        ),
        // Names outside the family groups are their own family.
        (
            "DD",
            "DuckDuckGo Privacy Browser",
            "Mozilla/5.0 (Linux; Android 10) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 \
             Chrome/119.0.6045.66 Mobile Safari/537.36 DuckDuckGo/5",
        ),
        (
            "SF",
            "Safari",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
        ),
    ];

    for (short, family, input) in cases {
        let got = parse(input);
        assert_eq!(short, got.client.short_name, "short name for \"{input}\"");
        assert_eq!(family, got.client.family, "family for \"{input}\"");
    }
}

#[test]
fn rule_order_is_priority() {
    let detector = Detector::new();

    // The Mobile variant sits above the plain Chrome rule and must win on
    // mobile texts without stealing desktop ones.
    let mobile = detector.parse_verbose(
        "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) \
         Chrome/119.0.6045.66 Mobile Safari/537.36",
        None,
    );
    assert_eq!(mobile.client.name, "Chrome Mobile");
    assert_eq!(
        mobile.details.unwrap().matched_pattern.as_deref(),
        Some(r"Chrome/(\d+[\.\d]*) Mobile"),
    );

    let desktop = detector.parse_verbose(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
         Chrome/119.0.6045.123 Safari/537.36",
        None,
    );
    assert_eq!(desktop.client.name, "Chrome");
    assert_eq!(
        desktop.details.unwrap().matched_pattern.as_deref(),
        Some(r"Chrome(?:/(\d+[\.\d]*))?"),
    );

    // Mini texts carry Opera Mobi tokens too; the Mini rule is listed first.
    let mini = detector.parse(
        "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80 (S60; SymbOS; Opera Mobi/23.348; U; en) \
         Presto/2.5.25 Version/10.54",
    );
    assert_eq!(mini.client.name, "Opera Mini");
    assert_eq!(mini.client.version, "9.80");
}

#[test]
fn results_are_identical_with_and_without_cache() {
    let ua = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) \
              Chrome/119.0.6045.66 Mobile Safari/537.36";

    let cached = Detector::new();
    let cold = cached.parse(ua);
    let warm = cached.parse(ua);
    assert_eq!(cold.client, warm.client);

    let uncached = Detector::with(DefaultRules::shared(), Arc::new(NullCache));
    assert_eq!(uncached.parse(ua).client, cold.client);
}

#[test]
fn unidentifiable_inputs_stay_empty() {
    for input in ["12345", "-", "Version/5.0", "(null)", "21/4.35.1.2", "15B93"] {
        let got = parse(input);
        assert!(got.client.is_unknown(), "input {input:?}");
        assert_eq!(got.client.name, "", "input {input:?}");
        assert_eq!(got.client.version, "", "input {input:?}");
    }
}

#[test]
fn hints_name_the_client_when_the_text_cannot() {
    let hints = ClientHints::new()
        .with_brand("Not;A Brand", "99")
        .with_brand("Chromium", "119")
        .with_brand("Google Chrome", "119");
    let got = parse_with_hints("-", &hints);
    assert_eq!(got.client.name, "Chrome");
    assert_eq!(got.client.version, "119");
    assert_eq!(got.client.short_name, "CH");
    assert_eq!(got.client.family, "Chrome");
    assert!(got.client.known);

    // A brand whose abbreviation is only listed with a " Browser" suffix.
    let hints = ClientHints::new().with_brand("UC", "13.4.0");
    let got = parse_with_hints("-", &hints);
    assert_eq!(got.client.name, "UC Browser");
    assert_eq!(got.client.version, "13.4.0");
    assert_eq!(got.client.short_name, "UC");
    assert_eq!(got.client.family, "Chrome");
}

#[test]
fn hint_version_updates_mobile_variants() {
    let ua = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) \
              Chrome/119.0.6045.66 Mobile Safari/537.36";
    let hints = ClientHints::new().with_brand("Google Chrome", "119.0.6045.123");

    let got = Detector::new().parse_verbose(ua, Some(&hints));
    assert_eq!(got.details.unwrap().reconciliation, "mobile-name-restored");
    assert_eq!(got.client.name, "Chrome Mobile");
    assert_eq!(got.client.short_name, "CM");
    assert_eq!(got.client.version, "119.0.6045.123");
}

#[test]
fn duckduckgo_brand_reports_the_engine_build() {
    let ua = "Mozilla/5.0 (Linux; Android 10) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 \
              Chrome/119.0.6045.66 Mobile Safari/537.36 DuckDuckGo/5";
    let hints = ClientHints::new().with_brand("DuckDuckGo Privacy Browser", "7.1");

    let got = parse_with_hints(ua, &hints);
    assert_eq!(got.client.name, "DuckDuckGo Privacy Browser");
    assert_eq!(got.client.version, "");
    assert_eq!(got.client.short_name, "DD");
    assert_eq!(got.client.engine, "WebKit");
    assert_eq!(got.client.engine_version, "7.1");
}

#[test]
fn calendar_chromium_brand_is_iridium() {
    let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
              Chrome/119.0.6045.123 Safari/537.36";
    let hints = ClientHints::new().with_brand("Chromium", "2024.03");

    let got = parse_with_hints(ua, &hints);
    assert_eq!(got.client.name, "Iridium");
    assert_eq!(got.client.short_name, "I1");
    assert_eq!(got.client.family, "Chrome");
    assert_eq!(got.client.version, "119.0.6045.123");
}

#[test]
fn container_browsers_reveal_embedded_clients() {
    let ua = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) \
              Chrome/119.0.6045.66 Mobile Safari/537.36 XYZBird/22.1.0";

    let got = Detector::new().parse_verbose(ua, None);
    assert_eq!(got.client.name, "Chrome Mobile");
    assert_eq!(got.details.unwrap().secondary_strategy, Some("name-version"));
    let secondary = got.client.secondary_client.as_deref().unwrap();
    assert_eq!(secondary.name, "XYZBird");
    assert_eq!(secondary.version, "22.1.0");
    assert!(secondary.known);
}

#[test]
fn app_identifiers_mark_embedded_applications() {
    let ua = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) \
              Chrome/119.0.6045.66 Mobile Safari/537.36 com.example.newsreader/5.4.1";
    let got = parse(ua);
    assert_eq!(got.client.name, "Chrome Mobile");
    assert_eq!(got.client.app_id, "com.example.newsreader");
    let secondary = got.client.secondary_client.as_deref().unwrap();
    assert_eq!(secondary.name, "Example Newsreader");
    assert_eq!(secondary.version, "5.4.1");
    assert!(!secondary.known);

    // Placeholder identifiers from app templates never count.
    let ua = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) \
              Chrome/119.0.6045.66 Mobile Safari/537.36 com.yourcompany.testwithcustomtabs/1.0";
    let got = parse(ua);
    assert_eq!(got.client.app_id, "");
    assert!(got.client.secondary_client.is_none());
}

#[test]
fn hint_app_id_overrides_text_identifiers() {
    let ua = "Mozilla/5.0 (Linux; Android 10; K; wv) AppleWebKit/537.36 (KHTML, like Gecko) \
              Version/4.0 Chrome/119.0.6045.66 Mobile Safari/537.36";
    let hints = ClientHints::new().with_app_id("com.instagram.android");

    let got = Detector::new().parse_verbose(ua, Some(&hints));
    assert_eq!(got.details.unwrap().reconciliation, "app-id-merge");
    assert_eq!(got.client.name, "Instagram");
    assert_eq!(got.client.app_id, "com.instagram.android");
    // The hint names the app but not its version; the text version stands.
    assert_eq!(got.client.version, "119.0.6045.66");
    assert_eq!(got.client.engine, "Blink");
}
