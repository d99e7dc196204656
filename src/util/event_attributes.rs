use super::constants::{
    NEW_VALUE_KEY, SALMON_EVENT_TYPE_KEY, SALMON_HOLDER_KEY, SALMON_ID_KEY,
    SALMON_PREVIOUS_HOLDER_KEY,
};

pub enum EventType {
    InstantiateContract,
    MigrateContract,
    RecordSalmon,
    ChangeSalmonHolder,
    InitLedger,
}
#[allow(clippy::from_over_into)]
impl Into<String> for EventType {
    fn into(self) -> String {
        match self {
            EventType::InstantiateContract => "instantiate_contract",
            EventType::MigrateContract => "migrate_contract",
            EventType::RecordSalmon => "record_salmon",
            EventType::ChangeSalmonHolder => "change_salmon_holder",
            EventType::InitLedger => "init_ledger",
        }
        .into()
    }
}
impl EventType {
    pub fn event_name(self) -> String {
        self.into()
    }
}

pub struct EventAttributes {
    attributes: Vec<(String, String)>,
}
impl EventAttributes {
    pub fn new(event_type: EventType) -> Self {
        EventAttributes {
            attributes: vec![(SALMON_EVENT_TYPE_KEY.into(), event_type.into())],
        }
    }

    pub fn for_salmon_event<T1: Into<String>, T2: Into<String>>(
        event_type: EventType,
        salmon_id: T1,
        holder: T2,
    ) -> Self {
        Self::new(event_type).set_salmon_id(salmon_id).set_holder(holder)
    }

    pub fn set_salmon_id<T: Into<String>>(mut self, salmon_id: T) -> Self {
        self.attributes.push((SALMON_ID_KEY.into(), salmon_id.into()));
        self
    }

    pub fn set_holder<T: Into<String>>(mut self, holder: T) -> Self {
        self.attributes.push((SALMON_HOLDER_KEY.into(), holder.into()));
        self
    }

    pub fn set_previous_holder<T: Into<String>>(mut self, previous_holder: T) -> Self {
        self.attributes.push((SALMON_PREVIOUS_HOLDER_KEY.into(), previous_holder.into()));
        self
    }

    pub fn set_new_value<T: ToString>(mut self, new_value: T) -> Self {
        self.attributes.push((NEW_VALUE_KEY.into(), new_value.to_string()));
        self
    }
}

impl IntoIterator for EventAttributes {
    type Item = (String, String);

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}
