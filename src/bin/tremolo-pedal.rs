#![no_main]
#![no_std]

use log::warn;
use panic_abort as _;
use rtic::app;

use stm32f1xx_hal::pac::{TIM2, TIM3};
use stm32f1xx_hal::timer::{CounterUs, PwmChannel, C1, C2};

use systick_monotonic::Systick;

use stm32f1_tremolo::config::{self, WAVE_COUNT};
use stm32f1_tremolo::*;

//-----------------------------------------------------------------------------

/// PA6: full tremolo with selectable shape.
static TREMOLO_A: Tremolo<WAVE_COUNT> = Tremolo::new(ChannelConfig::TREMOLO);

/// PA7: unscaled sine of the first revision.
static TREMOLO_B: Tremolo<1> = Tremolo::new(ChannelConfig::LEGACY);

type OutputA = TremoloTick<'static, NativeCh<PwmChannel<TIM3, C1>>, WAVE_COUNT>;
type OutputB = TremoloTick<'static, NativeCh<PwmChannel<TIM3, C2>>, 1>;

//-----------------------------------------------------------------------------

#[app(device = stm32f1xx_hal::pac, peripherals = true, dispatchers = [RTCALARM])]
mod app {
    use super::*;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        outputs: (OutputA, OutputB),
        scheduler: TickScheduler<Timer<CounterUs<TIM2>>>,
    }

    #[monotonic(binds = SysTick, default = true)]
    type MonoTimer = Systick<{ config::SYSTICK_RATE_HZ }>;

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        use stm32f1xx_hal::prelude::*;
        use stm32f1xx_hal::timer::{Event, Timer as HalTimer};
        use systick_monotonic::*;

        let mut flash = ctx.device.FLASH.constrain();

        let mut gpioa = ctx.device.GPIOA.split();
        let mut afio = ctx.device.AFIO.constrain();

        let rcc = ctx.device.RCC.constrain();
        let clocks = rcc
            .cfgr
            .use_hse(config::MCU_XTAL_HZ.Hz())
            .sysclk(32u32.MHz())
            .freeze(&mut flash.acr);

        let mono = Systick::new(ctx.core.SYST, clocks.sysclk().to_Hz());

        //---------------------------------------------------------------------

        let pins = (
            gpioa.pa6.into_alternate_push_pull(&mut gpioa.crl),
            gpioa.pa7.into_alternate_push_pull(&mut gpioa.crl),
        );
        let pwm = HalTimer::new(ctx.device.TIM3, &clocks).pwm_hz(
            pins,
            &mut afio.mapr,
            config::PWM_CARRIER_HZ.Hz(),
        );
        let (ch_a, ch_b) = pwm.split();

        let mut outputs = (
            TremoloTick::new(&TREMOLO_A, NativeCh::new(ch_a)),
            TremoloTick::new(&TREMOLO_B, NativeCh::new(ch_b)),
        );
        outputs.0.prime();
        outputs.1.prime();

        //---------------------------------------------------------------------

        let mut timer = ctx.device.TIM2.counter_us(&clocks);
        timer.listen(Event::Update);

        ctx.device
            .DBGMCU
            .cr
            .modify(|_, w| w.dbg_tim2_stop().set_bit());

        let mut scheduler = TickScheduler::new(Timer::new(timer), config::TICK_TIMER_CLOCK_HZ);
        scheduler
            .start(TickPeriod::new(
                config::DEFAULT_PRESCALER,
                TREMOLO_A.state().speed(),
            ))
            .unwrap();

        cycle_shape::spawn_after(config::SHAPE_CYCLE_PERIOD_MS.millis()).unwrap();

        //---------------------------------------------------------------------

        (
            Shared {},
            Local { outputs, scheduler },
            init::Monotonics(mono),
        )
    }

    //-------------------------------------------------------------------------

    #[idle()]
    fn idle(_ctx: idle::Context) -> ! {
        loop {
            cortex_m::asm::wfi();
        }
    }

    //-------------------------------------------------------------------------

    #[task(binds = TIM2, local = [outputs], priority = 3)]
    fn tim2(ctx: tim2::Context) {
        ctx.local.outputs.on_tick();
        unsafe { (*TIM2::ptr()).sr.modify(|_, w| w.uif().clear_bit()) };
    }

    #[task(local = [scheduler], priority = 1)]
    fn cycle_shape(ctx: cycle_shape::Context) {
        use systick_monotonic::*;

        let next = TREMOLO_A.state().shape().next();
        if let Ok(state) =
            TREMOLO_A.configure(next.index(), config::DEFAULT_DEPTH, config::DEFAULT_SPEED)
        {
            if let Err(e) = ctx.local.scheduler.retime(state.speed()) {
                warn!("speed {} not applied: {}", state.speed(), e);
            }
        }

        cycle_shape::spawn_after(config::SHAPE_CYCLE_PERIOD_MS.millis()).unwrap();
    }
}
