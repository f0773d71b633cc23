use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};


/// Derive macro to implement `Timestep` for a model that stores its step size
/// in a `dt` field and its clock in a `time` field, setting a non-positive
/// (or non-finite) `dt` is rejected and leaves the old value in place
#[proc_macro_derive(Timestep)]
pub fn derive_timestep(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics Timestep for #name #ty_generics #where_clause {
            fn get_dt(&self) -> f64 {
                self.dt
            }

            fn set_dt(&mut self, dt: f64) -> Result<(), crate::error::SimulationError> {
                if !(dt > 0. && dt.is_finite()) {
                    return Err(crate::error::ParameterError::InvalidTimestep(dt).into());
                }
                self.dt = dt;

                Ok(())
            }

            fn get_time(&self) -> f64 {
                self.time
            }

            fn set_time(&mut self, time: f64) {
                self.time = time;
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro to automatically implement the accessor traits required by
/// `IterateAndSpike`, including `CurrentVoltage`, `SpikeRecord` and `Stimulus`,
/// expects `current_voltage`, `spikes` and `stimulus` fields
#[proc_macro_derive(IterateAndSpikeBase)]
pub fn derive_iterate_and_spike_traits(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics CurrentVoltage for #name #ty_generics #where_clause {
            fn get_current_voltage(&self) -> f64 {
                self.current_voltage
            }

            fn set_current_voltage(&mut self, voltage: f64) {
                self.current_voltage = voltage;
            }
        }

        impl #impl_generics SpikeRecord for #name #ty_generics #where_clause {
            fn get_spike_times(&self) -> &[f64] {
                &self.spikes
            }
        }

        impl #impl_generics Stimulus for #name #ty_generics #where_clause {
            fn get_stimulus(&self) -> f64 {
                self.stimulus
            }

            fn set_stimulus(&mut self, stimulus: f64) {
                self.stimulus = stimulus;
            }
        }
    };

    TokenStream::from(expanded)
}
