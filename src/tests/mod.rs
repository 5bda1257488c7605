
use crate::config::Profile;

pub(crate) const SUCCESS_XML: &str = r#"<?xml version="1.0" encoding="utf-16"?>
<interface-response>
  <Command>SETDNSHOST</Command>
  <Language>eng</Language>
  <IP>203.0.113.7</IP>
  <ErrCount>0</ErrCount>
  <errors />
  <ResponseCount>0</ResponseCount>
  <responses />
  <Done>true</Done>
  <debug><![CDATA[]]></debug>
</interface-response>"#;

pub(crate) const REJECTED_XML: &str = r#"<?xml version="1.0" encoding="utf-16"?>
<interface-response>
  <Command>SETDNSHOST</Command>
  <Language>eng</Language>
  <ErrCount>1</ErrCount>
  <errors>
    <Err1>Passwords do not match</Err1>
  </errors>
  <ResponseCount>1</ResponseCount>
  <responses>
    <response>
      <ResponseNumber>304156</ResponseNumber>
      <ResponseString>Validation error; invalid ; password</ResponseString>
    </response>
  </responses>
  <Done>true</Done>
</interface-response>"#;

pub(crate) fn profile(auto_detect: bool, ip: &str) -> Profile {
    Profile {
        name: "home".to_string(),
        host: "@".to_string(),
        domain: "example.com".to_string(),
        dynamic_dns_password: "0123456789abcdef".to_string(),
        auto_detect_ip_address: auto_detect,
        ip_address: ip.to_string(),
    }
}
