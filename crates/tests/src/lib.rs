#[cfg(test)]
mod envelope_tests;

#[cfg(test)]
mod mock_api_tests;

#[cfg(test)]
mod role_access_tests;

#[cfg(test)]
mod sitemap_tests;
