// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use crate::config::settings::Settings;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::new().expect("defaults should always load");

        assert_eq!(settings.api.version, "2019-07-12");
        assert!(!settings.features.categories);
        assert!(!settings.features.concepts);
        assert!(!settings.features.sentiment);
        assert!(settings.features.sentiment_document);
        assert_eq!(settings.features.sentiment_targets, "");
        assert!(!settings.features.entities);

        // Default limits stay below the service caps
        assert!(settings.features.categories_limit <= 10);
        assert!(settings.features.concepts_limit <= 50);
        assert!(settings.features.entities_limit <= 250);
    }

    #[test]
    fn test_settings_allow_empty_credentials() {
        // Missing credentials surface only as a downstream HTTP failure,
        // never as a configuration load error
        let settings = Settings::new().expect("empty credentials are accepted");
        assert_eq!(settings.api.key, "");
        assert_eq!(settings.api.endpoint_url, "");
    }
}
