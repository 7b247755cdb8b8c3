// crates/cwmp-rs/tests/accessors.rs

use cwmp_rs::tr104::VoiceService;
use cwmp_rs::tr104::line::{CodecEntry, LineCodec};
use cwmp_rs::tr181::Device;
use cwmp_rs::tr181::bulkdata::{Http, Profile, ProfileParameter};
use cwmp_rs::tr181::dhcpv4::{Client, Pool, PoolOption, StaticAddress};
use cwmp_rs::tr181::mqtt::broker::{Bridge, Server, Subscription};
use cwmp_rs::tr196::cell_config::PlmnList;
use cwmp_rs::{HexBinary, IpAddress, MacAddress};
use std::net::Ipv4Addr;

#[test]
fn test_fresh_pool_has_empty_collections() {
    let pool = Pool::default();
    assert!(pool.clients.is_empty());
    assert!(pool.options.is_empty());
    assert!(pool.static_addresses.is_empty());
    assert_eq!(pool.enable, None);
    assert_eq!(pool.alias, None);
}

#[test]
fn test_with_static_address_is_retrievable() {
    let address = StaticAddress::default()
        .with_enable(true)
        .with_chaddr(MacAddress::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]))
        .with_yiaddr(Ipv4Addr::new(192, 168, 1, 20));

    let pool = Pool::default().with_static_address(address.clone());

    assert_eq!(pool.static_addresses.len(), 1);
    assert_eq!(pool.static_addresses[0], address);
    assert_eq!(
        pool.static_addresses[0].yiaddr,
        Some(IpAddress::from([192, 168, 1, 20]))
    );
}

#[test]
fn test_set_then_get_returns_value() {
    let mut pool = Pool::default();
    pool.set_enable(true);
    pool.set_alias("lan");
    pool.set_order(3);
    pool.set_lease_time(-1);
    pool.set_min_address(Ipv4Addr::new(10, 0, 0, 2));
    pool.set_client_id(HexBinary(vec![0x01, 0xAB]));

    assert_eq!(pool.enable, Some(true));
    assert_eq!(pool.alias.as_deref(), Some("lan"));
    assert_eq!(pool.order, Some(3));
    assert_eq!(pool.lease_time, Some(-1));
    assert_eq!(pool.min_address, Some(IpAddress::from(Ipv4Addr::new(10, 0, 0, 2))));
    assert_eq!(pool.client_id, Some(HexBinary(vec![0x01, 0xAB])));
}

#[test]
fn test_with_matches_set() {
    let mut by_setter = Bridge::default();
    by_setter.set_name("uplink");
    by_setter.set_keep_alive_time(30);
    by_setter.set_server_connection("Device.MQTT.Broker.1.Bridge.1.Server.2.");

    let by_builder = Bridge::default()
        .with_name("uplink")
        .with_keep_alive_time(30)
        .with_server_connection("Device.MQTT.Broker.1.Bridge.1.Server.2.");

    assert_eq!(by_setter, by_builder);
}

#[test]
fn test_setters_do_not_enforce_constraints() {
    // Alias is limited to 64 characters, Tag to 1..=254 and Status is read-only.
    let long_alias = "x".repeat(300);
    let option = PoolOption::default()
        .with_alias(long_alias.clone())
        .with_tag(999)
        .with_value(HexBinary(vec![0; 1000]));
    assert_eq!(option.alias, Some(long_alias));
    assert_eq!(option.tag, Some(999));

    let pool = Pool::default().with_status("NotAnEnumValue");
    assert_eq!(pool.status.as_deref(), Some("NotAnEnumValue"));

    // PLMNList allows at most six entries.
    let mut epc = cwmp_rs::tr196::cell_config::Epc::default();
    for _ in 0..10 {
        epc.add_plmn_list(PlmnList::default());
    }
    assert_eq!(epc.plmn_lists.len(), 10);
}

#[test]
fn test_add_returns_instance_number() {
    let mut pool = Pool::default();
    assert_eq!(pool.add_client(Client::default()), 1);
    assert_eq!(pool.add_client(Client::default()), 2);
    assert_eq!(pool.add_option(PoolOption::default().with_tag(6)), 1);
    assert_eq!(pool.clients.len(), 2);
}

#[test]
fn test_collection_setters_replace_contents() {
    let mut bridge = Bridge::default().with_server(Server::default().with_priority(1));
    bridge.set_servers(vec![
        Server::default().with_address("a.example.com"),
        Server::default().with_address("b.example.com"),
    ]);
    assert_eq!(bridge.servers.len(), 2);
    assert_eq!(bridge.servers[1].address.as_deref(), Some("b.example.com"));

    let bridge = bridge.with_subscriptions(vec![Subscription::default().with_topic("a/#")]);
    assert_eq!(bridge.subscriptions.len(), 1);
    assert_eq!(bridge.servers.len(), 2);
}

#[test]
fn test_child_object_accessors() {
    let mut device = Device::default();
    assert!(device.time.is_none());

    device.time_mut().set_ntp_server1("pool.ntp.org");
    device.time_mut().set_enable(true);
    let time = device.time.as_ref().expect("Time created lazily");
    assert_eq!(time.ntp_server1.as_deref(), Some("pool.ntp.org"));
    assert_eq!(time.enable, Some(true));

    let profile = Profile::default()
        .with_http(Http::default().with_url("https://collector.example.com"))
        .with_parameter(ProfileParameter::default().with_reference("Device.DeviceInfo.UpTime"));
    assert_eq!(
        profile.http.as_ref().and_then(|h| h.url.as_deref()),
        Some("https://collector.example.com")
    );
    assert_eq!(profile.parameters.len(), 1);
}

#[test]
fn test_explicit_item_name() {
    let codec = LineCodec::default()
        .with_codec_entry(CodecEntry::default().with_codec("G.711ALaw").with_priority(1))
        .with_codec_entry(CodecEntry::default().with_codec("G.729").with_priority(2));
    assert_eq!(codec.list.len(), 2);
    assert_eq!(codec.list[1].codec.as_deref(), Some("G.729"));
}

#[test]
fn test_deep_composition() {
    let mut device = Device::default();
    let services = device.services_mut();
    let index = services.add_voice_service(VoiceService::default());
    assert_eq!(index, 1);

    let voice = &mut services.voice_services[0];
    voice.capabilities_mut().set_max_line_count(4);
    assert_eq!(
        device.services.as_ref().map(|s| s.voice_services.len()),
        Some(1)
    );
}

#[test]
fn test_path_constants() {
    assert_eq!(Device::PATH, "Device.");
    assert_eq!(Pool::PATH, "Device.DHCPv4.Server.Pool.{i}.");
    assert_eq!(
        CodecEntry::PATH,
        "Device.Services.VoiceService.{i}.VoiceProfile.{i}.Line.{i}.Codec.List.{i}."
    );
}
